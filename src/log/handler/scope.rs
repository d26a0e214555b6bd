use crate::log::log_record::{Attr, Value};

/// 预绑定的属性及其绑定时所在的分组路径
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScopedAttr {
    pub groups: Vec<String>,
    pub attr: Attr,
}

/// 处理器的属性作用域：当前打开的分组和预绑定属性
///
/// 派生处理器时复制一份再追加，原作用域不变。
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Scope {
    groups: Vec<String>,
    bound: Vec<ScopedAttr>,
}

impl Scope {
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn with_attrs(&self, attrs: Vec<Attr>) -> Scope {
        let mut scope = self.clone();
        scope.bound.extend(attrs.into_iter().map(|attr| ScopedAttr {
            groups: self.groups.clone(),
            attr,
        }));
        scope
    }

    /// 空分组名不产生新的层级
    pub fn with_group(&self, name: &str) -> Scope {
        let mut scope = self.clone();
        if !name.is_empty() {
            scope.groups.push(name.to_string());
        }
        scope
    }

    /// 按输出顺序遍历所有叶子属性：先预绑定属性，再记录自身属性
    ///
    /// 回调参数为叶子属性所在的完整分组路径。
    /// 空分组被忽略，键为空的分组被展开到上一层，键为空的普通属性被忽略。
    pub fn walk<F>(&self, record_attrs: &[Attr], mut visit: F)
    where
        F: FnMut(&[String], &Attr),
    {
        let mut path = Vec::with_capacity(self.groups.len() + 2);

        for scoped in &self.bound {
            path.clear();
            path.extend(scoped.groups.iter().cloned());
            walk_attr(&mut path, &scoped.attr, &mut visit);
        }

        for attr in record_attrs {
            path.clear();
            path.extend(self.groups.iter().cloned());
            walk_attr(&mut path, attr, &mut visit);
        }
    }
}

fn walk_attr<F>(path: &mut Vec<String>, attr: &Attr, visit: &mut F)
where
    F: FnMut(&[String], &Attr),
{
    match &attr.value {
        Value::Group(children) => {
            if children.is_empty() {
                return;
            }
            if attr.key.is_empty() {
                for child in children {
                    walk_attr(path, child, visit);
                }
                return;
            }
            path.push(attr.key.clone());
            for child in children {
                walk_attr(path, child, visit);
            }
            path.pop();
        }
        _ if attr.key.is_empty() => {}
        _ => visit(path, attr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(scope: &Scope, attrs: &[Attr]) -> Vec<String> {
        let mut out = Vec::new();
        scope.walk(attrs, |groups, attr| {
            let mut key = groups.join(".");
            if !key.is_empty() {
                key.push('.');
            }
            key.push_str(&attr.key);
            out.push(format!("{}={}", key, attr.value));
        });
        out
    }

    #[test]
    fn test_walk_bound_before_record() {
        let scope = Scope::default().with_attrs(vec![Attr::new("service", "api")]);
        let out = collect(&scope, &[Attr::new("user", "alice")]);
        assert_eq!(out, vec!["service=api", "user=alice"]);
    }

    #[test]
    fn test_walk_groups_snapshot_at_bind_time() {
        let scope = Scope::default()
            .with_group("http")
            .with_attrs(vec![Attr::new("method", "GET")])
            .with_group("response");
        let out = collect(&scope, &[Attr::new("status", 200)]);
        assert_eq!(out, vec!["http.method=GET", "http.response.status=200"]);
    }

    #[test]
    fn test_walk_nested_group_values() {
        let attrs = vec![
            Attr::group(
                "req",
                vec![Attr::new("id", 1), Attr::group("user", vec![Attr::new("id", 2)])],
            ),
            Attr::group("", vec![Attr::new("inlined", true)]),
            Attr::group("empty", Vec::new()),
            Attr::new("", "dropped"),
        ];
        let out = collect(&Scope::default(), &attrs);
        assert_eq!(out, vec!["req.id=1", "req.user.id=2", "inlined=true"]);
    }

    #[test]
    fn test_empty_group_and_attrs_are_noop() {
        let scope = Scope::default().with_group("a").with_attrs(vec![Attr::new("k", 1)]);
        assert_eq!(scope.with_group(""), scope);
        assert_eq!(scope.with_attrs(Vec::new()), scope);
    }

    #[test]
    fn test_derive_does_not_mutate_receiver() {
        let base = Scope::default();
        let derived = base.with_group("g").with_attrs(vec![Attr::new("k", 1)]);
        assert!(base.groups().is_empty());
        assert_eq!(derived.groups().to_vec(), vec!["g".to_string()]);
        assert!(collect(&base, &[]).is_empty());
    }
}
