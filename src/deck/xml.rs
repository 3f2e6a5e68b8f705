// src/deck/xml.rs
//! PresentationML for individual slides.

use std::fmt::Write as FmtWrite;

use super::{
    DeckSlide, CONTENT_FONT_PT, EMU_PER_PT, REFERENCES_FONT_PT, REFERENCES_HEIGHT_PT,
    REFERENCES_LEFT_PT, REFERENCES_TOP_PT, REFERENCES_WIDTH_PT,
};
use crate::error::AppError;

pub(crate) const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub(crate) const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub(crate) const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

/// Escape XML special characters and drop characters XML 1.0 cannot carry.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(ch),
            c if (c as u32) < 0x20 || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

/// Splits text into paragraph lines the way a text frame does when its text
/// is assigned: one paragraph per line break.
fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.trim_end_matches('\r'))
}

/// Run formatting applied to every run of a text body.
#[derive(Debug, Clone, Copy, Default)]
struct RunStyle {
    bold: bool,
    size_pt: Option<u32>,
}

impl RunStyle {
    fn write_rpr(&self, xml: &mut String, element: &str) -> Result<(), AppError> {
        write!(xml, r#"<a:{} lang="en-US""#, element)?;
        if let Some(size) = self.size_pt {
            write!(xml, r#" sz="{}""#, size * 100)?;
        }
        if self.bold {
            xml.push_str(r#" b="1""#);
        }
        xml.push_str(r#" dirty="0"/>"#);
        Ok(())
    }
}

/// Placeholder kinds used by the two layouts.
#[derive(Debug, Clone, Copy)]
enum Placeholder {
    CenteredTitle,
    Subtitle,
    Title,
    Body,
}

impl Placeholder {
    fn ph_element(self) -> &'static str {
        match self {
            Placeholder::CenteredTitle => r#"<p:ph type="ctrTitle"/>"#,
            Placeholder::Subtitle => r#"<p:ph type="subTitle" idx="1"/>"#,
            Placeholder::Title => r#"<p:ph type="title"/>"#,
            Placeholder::Body => r#"<p:ph idx="1"/>"#,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Placeholder::CenteredTitle | Placeholder::Title => "Title",
            Placeholder::Subtitle => "Subtitle",
            Placeholder::Body => "Content Placeholder",
        }
    }
}

/// Writes the text runs of a body, one paragraph per line.
fn write_paragraphs(xml: &mut String, text: Option<&str>, style: RunStyle) -> Result<(), AppError> {
    let Some(text) = text else {
        xml.push_str("<a:p/>");
        return Ok(());
    };

    for line in paragraphs(text) {
        xml.push_str("<a:p>");
        if line.is_empty() {
            style.write_rpr(xml, "endParaRPr")?;
        } else {
            xml.push_str("<a:r>");
            style.write_rpr(xml, "rPr")?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
            xml.push_str("</a:r>");
        }
        xml.push_str("</a:p>");
    }
    Ok(())
}

fn write_placeholder(
    xml: &mut String,
    shape_id: u32,
    placeholder: Placeholder,
    text: Option<&str>,
    style: RunStyle,
) -> Result<(), AppError> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        shape_id,
        placeholder.name(),
        shape_id - 1
    )?;
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    write!(xml, "<p:nvPr>{}</p:nvPr>", placeholder.ph_element())?;
    xml.push_str("</p:nvSpPr>");
    xml.push_str("<p:spPr/>");
    xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
    write_paragraphs(xml, text, style)?;
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_references_box(xml: &mut String, shape_id: u32, text: &str) -> Result<(), AppError> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="TextBox {}"/>"#, shape_id, shape_id - 1)?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/>"#);
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr><a:xfrm>");
    write!(
        xml,
        r#"<a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/>"#,
        REFERENCES_LEFT_PT * EMU_PER_PT,
        REFERENCES_TOP_PT * EMU_PER_PT,
        REFERENCES_WIDTH_PT * EMU_PER_PT,
        REFERENCES_HEIGHT_PT * EMU_PER_PT
    )?;
    xml.push_str(r#"</a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#);

    xml.push_str(r#"<p:txBody><a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr><a:lstStyle/>"#);
    write_paragraphs(
        xml,
        Some(text),
        RunStyle {
            bold: false,
            size_pt: Some(REFERENCES_FONT_PT),
        },
    )?;
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    Ok(())
}

/// Generates `ppt/slides/slideN.xml` for one deck slide.
pub(crate) fn slide_xml(slide: &DeckSlide) -> Result<String, AppError> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        NS_A, NS_R, NS_P
    )?;
    xml.push_str("<p:cSld><p:spTree>");

    // Group shape properties (required), id 1
    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str(r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#);

    match slide {
        DeckSlide::Cover { title, subtitle } => {
            write_placeholder(&mut xml, 2, Placeholder::CenteredTitle, Some(title), RunStyle::default())?;
            write_placeholder(&mut xml, 3, Placeholder::Subtitle, Some(subtitle), RunStyle::default())?;
        }
        DeckSlide::Content {
            header,
            body,
            references,
        } => {
            write_placeholder(&mut xml, 2, Placeholder::Title, header.as_deref(), RunStyle::default())?;
            write_placeholder(
                &mut xml,
                3,
                Placeholder::Body,
                body.as_deref(),
                RunStyle {
                    bold: true,
                    size_pt: Some(CONTENT_FONT_PT),
                },
            )?;
            if let Some(references) = references {
                write_references_box(&mut xml, 4, references)?;
            }
        }
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(header: Option<&str>, body: Option<&str>, references: Option<&str>) -> DeckSlide {
        DeckSlide::Content {
            header: header.map(str::to_string),
            body: body.map(str::to_string),
            references: references.map(str::to_string),
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape_xml("bell\u{7}tab\t"), "belltab\t");
    }

    #[test]
    fn test_cover_slide_xml() {
        let xml = slide_xml(&DeckSlide::Cover {
            title: "OCEANS".to_string(),
            subtitle: "Generated by AI".to_string(),
        })
        .unwrap();

        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
        assert!(xml.contains("<a:t>OCEANS</a:t>"));
        assert!(xml.contains("<a:t>Generated by AI</a:t>"));
    }

    #[test]
    fn test_content_runs_are_bold_18pt() {
        let xml = slide_xml(&content(Some("Header"), Some("Line one\nLine two"), None)).unwrap();

        assert!(xml.contains("<a:t>Header</a:t>"));
        assert_eq!(xml.matches(r#"<a:rPr lang="en-US" sz="1800" b="1" dirty="0"/>"#).count(), 2);
        assert!(xml.contains("<a:t>Line one</a:t>"));
        assert!(xml.contains("<a:t>Line two</a:t>"));
    }

    #[test]
    fn test_references_box_geometry_and_size() {
        let xml = slide_xml(&content(Some("H"), Some("C"), Some("- Smith 2020"))).unwrap();

        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:off x="635000" y="5715000"/>"#));
        assert!(xml.contains(r#"<a:ext cx="10922000" cy="1270000"/>"#));
        assert!(xml.contains(r#"wrap="square""#));
        assert!(xml.contains(r#"<a:rPr lang="en-US" sz="1200" dirty="0"/>"#));
        assert!(xml.contains("<a:t>- Smith 2020</a:t>"));
    }

    #[test]
    fn test_missing_references_has_no_text_box() {
        let xml = slide_xml(&content(Some("H"), Some("C"), None)).unwrap();
        assert!(!xml.contains("txBox"));
    }

    #[test]
    fn test_missing_content_leaves_empty_body() {
        let xml = slide_xml(&content(Some("H"), None, None)).unwrap();
        assert!(xml.contains(r#"<p:ph idx="1"/>"#));
        assert!(!xml.contains(r#"b="1""#));
        assert!(xml.contains("<a:p/>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = slide_xml(&content(Some("Q&A <live>"), None, None)).unwrap();
        assert!(xml.contains("<a:t>Q&amp;A &lt;live&gt;</a:t>"));
    }
}
