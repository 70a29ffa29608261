use std::time::Duration;

use wasm_bindgen_futures::spawn_local;

/// Convert a JS (UTF-16) string index, as reported by a textarea selection,
/// to a byte index into the same string. Indices past the end clamp to the
/// end.
pub fn utf16_to_byte_index(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, c) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += c.len_utf16();
    }
    s.len()
}

/// Inverse of [`utf16_to_byte_index`]; `byte_idx` must lie on a char
/// boundary.
pub fn byte_to_utf16_index(s: &str, byte_idx: usize) -> usize {
    s[..byte_idx].chars().map(|c| c.len_utf16()).sum()
}

/// Re-focus the textarea and collapse the caret to `caret` (an UTF-16
/// index), one tick later so the re-rendered value has settled.
pub fn refocus_with_caret(textarea: web_sys::HtmlTextAreaElement, caret: u32) {
    spawn_local(async move {
        wasm_timer::Delay::new(Duration::from_millis(0))
            .await
            .expect("failed sleeping");
        let _ = textarea.focus();
        let _ = textarea.set_selection_range(caret, caret);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_conversion_is_identity_on_ascii() {
        assert_eq!(utf16_to_byte_index("hello", 3), 3);
        assert_eq!(byte_to_utf16_index("hello", 3), 3);
        assert_eq!(utf16_to_byte_index("hello", 99), 5);
    }

    #[test]
    fn index_conversion_handles_multibyte() {
        // 'é' is 2 bytes in UTF-8 but 1 UTF-16 unit
        let s = "héllo";
        assert_eq!(utf16_to_byte_index(s, 2), 3);
        assert_eq!(byte_to_utf16_index(s, 3), 2);
        // '🦀' is 4 bytes in UTF-8 and 2 UTF-16 units
        let s = "a🦀b";
        assert_eq!(utf16_to_byte_index(s, 3), 5);
        assert_eq!(byte_to_utf16_index(s, 5), 3);
    }
}
