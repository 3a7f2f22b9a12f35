use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// How long the object URL outlives the click that starts the download.
pub const REVOKE_DELAY_MS: i32 = 1_000;

/// Hands `contents` to the browser as a file download named `file_name`.
///
/// Returns the object URL backing the download. It is revoked on a later tick,
/// never synchronously after the click.
pub fn download_text(file_name: &str, contents: &str, mime: &str) -> Result<String, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("no document"))?;

	let parts = js_sys::Array::of1(&JsValue::from_str(contents));
	let options = BlobPropertyBag::new();
	options.set_type(mime);
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&url);
	anchor.set_download(file_name);
	anchor.click();

	let revoked = url.clone();
	let revoke = Closure::once_into_js(move || {
		let _ = Url::revoke_object_url(&revoked);
	});
	window.set_timeout_with_callback_and_timeout_and_arguments_0(
		revoke.unchecked_ref(),
		REVOKE_DELAY_MS,
	)?;
	Ok(url)
}
