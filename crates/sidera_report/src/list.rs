//! Grammatical list joining for report lines.

/// Join items as prose: "Nothing", "X", "X and Y", "X, Y, and Z".
///
/// With `isare`, a verb phrase is appended so the result can lead a
/// sentence: " is " for zero or one item, " are " for two or more.
pub fn join_list<S: AsRef<str>>(items: &[S], isare: bool) -> String {
    let mut out = match items {
        [] => String::from("Nothing"),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        _ => {
            let head = items[..items.len() - 1]
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{head}, and {}", items[items.len() - 1].as_ref())
        }
    };
    if isare {
        out.push_str(if items.len() >= 2 { " are " } else { " is " });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_nothing() {
        assert_eq!(join_list::<&str>(&[], false), "Nothing");
        assert_eq!(join_list::<&str>(&[], true), "Nothing is ");
    }

    #[test]
    fn single_item() {
        assert_eq!(join_list(&["A"], false), "A");
        assert_eq!(join_list(&["A"], true), "A is ");
    }

    #[test]
    fn two_items_join_with_and() {
        assert_eq!(join_list(&["A", "B"], false), "A and B");
        assert_eq!(join_list(&["A", "B"], true), "A and B are ");
    }

    #[test]
    fn three_or_more_take_the_oxford_comma() {
        assert_eq!(join_list(&["A", "B", "C"], false), "A, B, and C");
        assert_eq!(join_list(&["A", "B", "C", "D"], true), "A, B, C, and D are ");
    }
}
