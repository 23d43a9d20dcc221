//! Document assembly: page tree, font resources, catalog, serialization.

use std::io::Cursor;

use formdoc_layout::{FontLibrary, FontRole, LayoutConfig, Page};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

use crate::content::{FontResources, page_content};
use crate::error::RenderError;

/// Incrementally collects finished pages into a `lopdf` document.
///
/// One writer builds one document: pages are appended in order and
/// [`finish`](Self::finish) serializes the whole structure into a byte
/// buffer. The shared resources dictionary carries both built-in faces as
/// Type1 references with WinAnsiEncoding.
pub struct DocumentWriter {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    fonts: FontResources,
    page_width: f32,
    page_height: f32,
}

impl DocumentWriter {
    pub fn new(config: &LayoutConfig, fonts: &FontLibrary) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        let mut regular = String::new();
        let mut bold = String::new();
        for (i, (role, postscript_name)) in fonts.registered_faces().iter().enumerate() {
            let resource = format!("F{}", i + 1);
            font_dict.set(
                resource.as_bytes(),
                Object::Dictionary(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => postscript_name.to_string(),
                    "Encoding" => "WinAnsiEncoding",
                }),
            );
            match role {
                FontRole::Regular => regular = resource,
                FontRole::Bold => bold = resource,
            }
        }
        let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

        Self {
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            fonts: FontResources { regular, bold },
            page_width: config.page_width,
            page_height: config.page_height,
        }
    }

    /// Appends one laid-out page as a content stream plus page object.
    pub fn write_page(&mut self, page: &Page) -> Result<(), RenderError> {
        let content = page_content(page, &self.fonts);
        let stream = Stream::new(dictionary! {}, content.encode()?);
        let content_id = self.doc.add_object(Object::Stream(stream));

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.0.into(),
                0.0.into(),
                self.page_width.into(),
                self.page_height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        self.page_ids.push(self.doc.add_object(page_dict));
        Ok(())
    }

    /// Writes the page tree and catalog, then serializes the document.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut buffer = Cursor::new(Vec::new());
        self.doc.save_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }
}

/// Serializes a finished layout into PDF bytes.
pub fn render_pages(
    pages: &[Page],
    config: &LayoutConfig,
    fonts: &FontLibrary,
) -> Result<Vec<u8>, RenderError> {
    let mut writer = DocumentWriter::new(config, fonts);
    for page in pages {
        writer.write_page(page)?;
    }
    log::debug!("serialized {} pages into the document", pages.len());
    writer.finish()
}
