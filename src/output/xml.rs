//! Sitemap-protocol XML documents
//!
//! Both document shapes share the XML declaration, two-space indentation
//! and the sitemap 0.9 namespace on the root element.

use crate::output::types::OutputResult;
use crate::state::PageRecord;
use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Namespace for `urlset` and `sitemapindex` roots
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Renders a `urlset` document, one `url` element per record, in slice order
pub fn render_urlset(records: &[PageRecord]) -> OutputResult<Vec<u8>> {
    let mut writer = document_writer()?;

    writer.write_event(Event::Start(root_element("urlset")))?;
    for record in records {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &record.loc)?;
        write_text_element(&mut writer, "lastmod", &record.lastmod_string())?;
        write_text_element(&mut writer, "changefreq", record.changefreq.as_str())?;
        write_text_element(&mut writer, "priority", &record.priority)?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    Ok(finish(writer))
}

/// Renders a `sitemapindex` document
///
/// Every entry shares the same `lastmod`, the date the index was generated.
pub fn render_sitemap_index(locs: &[String], generated: NaiveDate) -> OutputResult<Vec<u8>> {
    let lastmod = generated.format("%Y-%m-%d").to_string();
    let mut writer = document_writer()?;

    writer.write_event(Event::Start(root_element("sitemapindex")))?;
    for loc in locs {
        writer.write_event(Event::Start(BytesStart::new("sitemap")))?;
        write_text_element(&mut writer, "loc", loc)?;
        write_text_element(&mut writer, "lastmod", &lastmod)?;
        writer.write_event(Event::End(BytesEnd::new("sitemap")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("sitemapindex")))?;

    Ok(finish(writer))
}

fn document_writer() -> OutputResult<Writer<Vec<u8>>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(writer)
}

fn root_element(name: &str) -> BytesStart<'_> {
    BytesStart::new(name).with_attributes([("xmlns", SITEMAP_NAMESPACE)])
}

/// Writes `<name>text</name>`; the text is escaped by `BytesText::new`
fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> OutputResult<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn finish(writer: Writer<Vec<u8>>) -> Vec<u8> {
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    bytes
}
