/// Ordered set of field names a payload may reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAllowList {
    fields: Vec<String>,
}

impl FieldAllowList {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = FieldAllowList::default();
        for field in fields {
            let field = field.into();
            if !list.fields.contains(&field) {
                list.fields.push(field);
            }
        }
        list
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FieldAllowList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        FieldAllowList::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_occurrence_order() {
        let list = FieldAllowList::new(["age", "name", "age"]);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["age", "name"]);
        assert!(list.contains("name"));
        assert!(!list.contains("Name"));
    }
}
