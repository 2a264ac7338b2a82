//! Output framing

use crate::infrastructure::Delimiter;

/// Join names for output, each one followed by the delimiter
pub fn format_name_list(names: &[String], delimiter: Delimiter) -> String {
    let mut output = String::new();
    for name in names {
        output.push_str(name);
        output.push(delimiter.as_char());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_name_list(&[], Delimiter::Newline), "");
    }

    #[test]
    fn test_format_newline_list() {
        let names = vec!["a".to_string(), "b".to_string()];
        assert_eq!(format_name_list(&names, Delimiter::Newline), "a\nb\n");
    }

    #[test]
    fn test_format_nul_list() {
        let names = vec!["a".to_string(), "b".to_string()];
        assert_eq!(format_name_list(&names, Delimiter::Nul), "a\0b\0");
    }
}
