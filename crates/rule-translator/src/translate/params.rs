/// Hands out placeholder names unique within one translation.
///
/// Names already bound on the target sink are passed over, so a translation
/// never rebinds a placeholder the caller set up.
#[derive(Debug, Clone)]
pub struct ParamNames {
    prefix: String,
    next: usize,
}

impl ParamNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Next `{prefix}{n}` for which `taken` is false.
    pub fn next_name(&mut self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let name = format!("{}{}", self.prefix, self.next);
            self.next += 1;
            if !taken(&name) {
                return name;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_sequential() {
        let mut names = ParamNames::new("p");
        assert_eq!(names.next_name(|_| false), "p0");
        assert_eq!(names.next_name(|_| false), "p1");

        let mut prefixed = ParamNames::new("qb");
        assert_eq!(prefixed.next_name(|_| false), "qb0");
    }

    #[test]
    fn test_taken_names_are_skipped() {
        let bound = ["p0", "p2"];
        let mut names = ParamNames::new("p");
        assert_eq!(names.next_name(|n| bound.contains(&n)), "p1");
        assert_eq!(names.next_name(|n| bound.contains(&n)), "p3");
    }
}
