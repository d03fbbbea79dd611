//! Operation application.

use reconcile_core::Operation;

/// Apply `operations` to `content` strictly in order.
///
/// Each position is read against the buffer as already changed by the
/// operations before it in the same call. Positions and lengths count chars
/// and clamp to the buffer end instead of failing; callers that need strict
/// bounds must validate first.
///
/// - `Insert` splices its content at `position` (a replace first removes the
///   span it overwrites)
/// - `Delete` removes `[position, position + length)`
/// - `Retain` changes nothing
pub fn apply_operations(content: &str, operations: &[Operation]) -> String {
    let mut buffer: Vec<char> = content.chars().collect();

    for op in operations {
        match op {
            Operation::Insert {
                position,
                content,
                replaces,
            } => {
                let at = (*position).min(buffer.len());
                if let Some(span) = replaces {
                    let end = at.saturating_add(*span).min(buffer.len());
                    buffer.drain(at..end);
                }
                buffer.splice(at..at, content.chars());
            }
            Operation::Delete { position, length } => {
                let start = (*position).min(buffer.len());
                let end = position.saturating_add(*length).min(buffer.len());
                buffer.drain(start..end);
            }
            Operation::Retain { .. } => {}
        }
    }

    buffer.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_in_array_order() {
        let ops = vec![
            Operation::insert(11, "!"),
            Operation::delete(5, 1),
            Operation::insert(5, ","),
        ];
        assert_eq!(apply_operations("Hello World", &ops), "Hello,World!");
    }

    #[test]
    fn retain_is_a_no_op() {
        let ops = vec![Operation::retain(0, 5), Operation::retain(3, 100)];
        assert_eq!(apply_operations("hello", &ops), "hello");
    }

    #[test]
    fn out_of_range_insert_appends() {
        let ops = vec![Operation::insert(99, "!")];
        assert_eq!(apply_operations("hi", &ops), "hi!");
    }

    #[test]
    fn out_of_range_delete_clamps() {
        assert_eq!(apply_operations("hello", &[Operation::delete(3, 50)]), "hel");
        assert_eq!(apply_operations("hello", &[Operation::delete(50, 2)]), "hello");
    }

    #[test]
    fn replace_overwrites_its_span() {
        let ops = vec![Operation::replace(6, 5, "there")];
        assert_eq!(apply_operations("hello world", &ops), "hello there");
    }

    #[test]
    fn positions_count_chars() {
        let ops = vec![Operation::insert(2, "ü"), Operation::delete(0, 1)];
        assert_eq!(apply_operations("héllo", &ops), "éüllo");
    }

    #[test]
    fn empty_list_returns_input() {
        assert_eq!(apply_operations("same", &[]), "same");
    }
}
