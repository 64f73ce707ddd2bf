//! Client-side checks run before anything is sent.

use crate::types::{PreviewSlot, SelectedFile, UploadError};

/// Check that both files are present and each is at most `max_size` bytes.
///
/// Presence is checked before size, so a missing file always wins over
/// an oversized one.
pub fn validate_selection<F: SelectedFile>(
    image1: Option<F>,
    image2: Option<F>,
    max_size: u64,
) -> Result<(F, F), UploadError> {
    let (image1, image2) = match (image1, image2) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(UploadError::MissingInput),
    };

    for (slot, file) in PreviewSlot::ALL.iter().zip([&image1, &image2]) {
        let size = file.size();
        if size > max_size {
            return Err(UploadError::OversizeInput {
                field: slot.field(),
                size,
            });
        }
    }

    Ok((image1, image2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILE_SIZE;

    struct FakeImage(u64);

    impl SelectedFile for FakeImage {
        fn size(&self) -> u64 {
            self.0
        }

        fn name(&self) -> String {
            "photo.png".to_string()
        }
    }

    #[test]
    fn test_missing_either_file() {
        let cases = [
            (None, Some(FakeImage(10))),
            (Some(FakeImage(10)), None),
            (None, None),
        ];
        for (a, b) in cases {
            let result = validate_selection(a, b, MAX_FILE_SIZE);
            assert!(matches!(result, Err(UploadError::MissingInput)));
        }
    }

    #[test]
    fn test_missing_checked_before_size() {
        let result = validate_selection(Some(FakeImage(MAX_FILE_SIZE + 1)), None, MAX_FILE_SIZE);
        assert!(matches!(result, Err(UploadError::MissingInput)));
    }

    #[test]
    fn test_oversize_in_either_slot() {
        let result = validate_selection(Some(FakeImage(MAX_FILE_SIZE + 1)), Some(FakeImage(1)), MAX_FILE_SIZE);
        assert_eq!(
            result.err(),
            Some(UploadError::OversizeInput { field: "image1", size: MAX_FILE_SIZE + 1 })
        );

        let result = validate_selection(Some(FakeImage(1)), Some(FakeImage(5_000_000)), MAX_FILE_SIZE);
        assert_eq!(
            result.err(),
            Some(UploadError::OversizeInput { field: "image2", size: 5_000_000 })
        );
    }

    #[test]
    fn test_exact_limit_is_accepted() {
        let result = validate_selection(Some(FakeImage(MAX_FILE_SIZE)), Some(FakeImage(0)), MAX_FILE_SIZE);
        let (a, b) = result.expect("files at the limit should pass");
        assert_eq!(a.size(), 2_097_152);
        assert_eq!(b.size(), 0);
    }
}
