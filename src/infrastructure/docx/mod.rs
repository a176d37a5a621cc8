//! Word document adapters
//!
//! Works directly on the OOXML package: the zip container is rebuilt around
//! an edited `word/document.xml`, everything else is copied as-is.

mod extractor;
mod injector;
mod locate;
mod package;
mod scan;
mod writer;

#[cfg(test)]
mod fixtures;

pub use extractor::DocxTextExtractor;
pub use injector::DocxInjector;
pub use package::DOCUMENT_PART;
