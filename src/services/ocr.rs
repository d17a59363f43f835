use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use aoiler_protocol::OcrResult;
use tracing::debug;

use super::ServiceError;
use super::command::run_tool;
use super::paths::{expand_home, extension_of, extract_path, home_dir};

const TESSERACT: &str = "tesseract";
const SLURP: &str = "slurp";
const GRIM: &str = "grim";

/// Image formats tesseract reads.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff", "tif", "gif", "webp"];

/// Capture and recognition settings.
#[derive(Debug, Clone)]
pub struct OcrOptions {
	/// Region capture script run with `-au`; used when it exists.
	pub script: Option<PathBuf>,
	/// Tesseract language code.
	pub language: String,
}

impl Default for OcrOptions {
	fn default() -> Self {
		Self {
			script: home_dir().map(|home| home.join(".config/hecate/scripts/ocr-capture.sh")),
			language: "eng".to_string(),
		}
	}
}

/// Extracts text from an image file or a captured screen region.
#[derive(Debug, Clone, Default)]
pub struct Ocr {
	options: OcrOptions,
}

impl Ocr {
	pub fn new(options: OcrOptions) -> Self {
		Self { options }
	}

	/// Recognise text for `query`: the image it names, or a fresh capture.
	pub fn extract(&self, query: &str) -> Result<OcrResult, ServiceError> {
		let text = match image_in_query(query) {
			Some(image) => self.recognise_file(&image)?,
			None => self.capture()?,
		};
		let text = text.trim();
		if text.is_empty() {
			return Err(ServiceError::NoTextDetected);
		}
		Ok(OcrResult {
			text: text.to_string(),
		})
	}

	/// Run tesseract over an existing image.
	pub fn recognise_file(&self, image: &Path) -> Result<String, ServiceError> {
		if !image.is_file() {
			return Err(ServiceError::ImageNotFound(image.to_path_buf()));
		}
		run_tool(
			TESSERACT,
			[
				image.as_os_str(),
				OsStr::new("stdout"),
				OsStr::new("-l"),
				OsStr::new(&self.options.language),
			],
		)?
		.into_success(TESSERACT)
	}

	fn capture(&self) -> Result<String, ServiceError> {
		if let Some(script) = self.options.script.as_deref().filter(|path| path.is_file()) {
			debug!(script = %script.display(), "capturing with script");
			return run_tool(script, ["-au"])?.into_success(&script.display().to_string());
		}

		let geometry = run_tool(SLURP, std::iter::empty::<&str>())?.into_success(SLURP)?;
		let shot = tempfile::Builder::new()
			.prefix("aoiler-ocr-")
			.suffix(".png")
			.tempfile()?;
		run_tool(
			GRIM,
			[
				OsStr::new("-g"),
				OsStr::new(geometry.trim()),
				shot.path().as_os_str(),
			],
		)?
		.into_success(GRIM)?;
		self.recognise_file(shot.path())
	}
}

/// Image path named in `query`, if it has an image extension.
fn image_in_query(query: &str) -> Option<PathBuf> {
	let word = extract_path(query)?;
	let extension = extension_of(&word)?;
	IMAGE_EXTENSIONS
		.contains(&extension.as_str())
		.then(|| expand_home(&word))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_image_paths_select_file_mode() {
		assert_eq!(
			image_in_query("extract text from shots/receipt.PNG"),
			Some(PathBuf::from("shots/receipt.PNG"))
		);
		assert_eq!(image_in_query("extract text from notes.txt"), None);
		assert_eq!(image_in_query("Extract text from screen"), None);
	}

	#[test]
	fn missing_images_are_reported() {
		let ocr = Ocr::default();
		let err = ocr
			.extract("read text from /definitely/not/here.png")
			.unwrap_err();
		assert_eq!(err.to_string(), "image file not found: /definitely/not/here.png");
	}
}
