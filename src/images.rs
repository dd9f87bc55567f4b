//! Writing extracted image payloads to disk.

use crate::{ExtractError, PageContent, Result};
use std::path::{Path, PathBuf};

/// Write every page's image payloads to `output_dir`, creating the
/// directory if necessary, and return the path of the **last** image
/// written across the whole document.
///
/// Files are named `image_page_<n>_img_<m>.png` with 1-based page and
/// in-page indices; existing files are silently overwritten. The payload is
/// written exactly as stored in the PDF, `.png` name notwithstanding —
/// faithful to the legacy script this crate replaces.
///
/// Only one path is returned because only one picture ends up embedded in
/// the workbook, regardless of how many images the document carries; the N
/// files on disk are a side effect the caller gets for free.
///
/// Fails with [`ExtractError::NoImagesFound`] when no page carries any
/// image, so the caller never dereferences a path that was never assigned.
pub fn save_page_images<P: AsRef<Path>>(pages: &[PageContent], output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir).map_err(|source| ExtractError::DirectoryCreate {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut last_written: Option<PathBuf> = None;

    for page in pages {
        for (index, payload) in page.images.iter().enumerate() {
            let path = output_dir.join(image_file_name(page.page_number, index + 1));
            std::fs::write(&path, payload).map_err(|source| ExtractError::FileWrite {
                path: path.clone(),
                source,
            })?;
            last_written = Some(path);
        }
    }

    last_written.ok_or(ExtractError::NoImagesFound)
}

/// Deterministic image file name for 1-based page/image indices.
pub fn image_file_name(page_number: u32, image_number: usize) -> String {
    format!("image_page_{page_number}_img_{image_number}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_images(page_number: u32, payloads: &[&[u8]]) -> PageContent {
        PageContent {
            page_number,
            text: String::new(),
            images: payloads.iter().map(|p| p.to_vec()).collect(),
        }
    }

    #[test]
    fn file_names_use_one_based_indices() {
        assert_eq!(image_file_name(1, 1), "image_page_1_img_1.png");
        assert_eq!(image_file_name(3, 2), "image_page_3_img_2.png");
    }

    #[test]
    fn writes_every_image_and_returns_the_last_path() {
        let dir = tempfile::tempdir().unwrap();
        let pages = [
            page_with_images(1, &[b"one", b"two"]),
            page_with_images(2, &[b"three"]),
        ];

        let last = save_page_images(&pages, dir.path()).unwrap();

        assert_eq!(last, dir.path().join("image_page_2_img_1.png"));
        assert_eq!(
            std::fs::read(dir.path().join("image_page_1_img_1.png")).unwrap(),
            b"one"
        );
        assert_eq!(
            std::fs::read(dir.path().join("image_page_1_img_2.png")).unwrap(),
            b"two"
        );
        assert_eq!(std::fs::read(&last).unwrap(), b"three");
    }

    #[test]
    fn zero_images_is_an_explicit_error() {
        let dir = tempfile::tempdir().unwrap();
        let pages = [page_with_images(1, &[])];

        let err = save_page_images(&pages, dir.path()).unwrap_err();
        assert!(matches!(err, ExtractError::NoImagesFound));
    }

    #[test]
    fn existing_files_are_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let pages = [page_with_images(1, &[b"new"])];
        std::fs::write(dir.path().join("image_page_1_img_1.png"), b"old").unwrap();

        let last = save_page_images(&pages, dir.path()).unwrap();
        assert_eq!(std::fs::read(&last).unwrap(), b"new");
    }

    #[test]
    fn creates_the_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("images");
        let pages = [page_with_images(1, &[b"data"])];

        let last = save_page_images(&pages, &nested).unwrap();
        assert!(last.starts_with(&nested));
        assert!(last.exists());
    }
}
