// Resume builder: browse templates, fill fields, preview, print.
// Documents are plain HTML assembled from a template's style strings and
// the escaped field values; printing is left to the browser's print dialog.

pub mod document;
pub mod handlers;
pub mod templates;
