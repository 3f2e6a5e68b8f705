// src/deck/package.rs
//! Zip packaging of the presentation parts.
//!
//! The package carries one slide master with two layouts ("Title Slide" and
//! "Title and Content") and a single theme; every slide references one of the
//! two layouts.

use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::xml::{escape_xml, slide_xml, NS_A, NS_P, NS_R, XML_DECLARATION};
use super::{Deck, DeckSlide};
use crate::error::AppError;

pub const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

/// 10in x 7.5in, the 4:3 default.
const SLIDE_WIDTH_EMU: i64 = 9_144_000;
const SLIDE_HEIGHT_EMU: i64 = 6_858_000;

/// Slide ids start at 256 in PresentationML.
const FIRST_SLIDE_ID: usize = 256;

/// Relationship ids in presentation.xml.rels: rId1 master, rId2 theme, slides after.
const FIRST_SLIDE_REL: usize = 3;

const TITLE_SLIDE_LAYOUT: &str = "slideLayout1.xml";
const TITLE_AND_CONTENT_LAYOUT: &str = "slideLayout2.xml";

/// Writes the complete `.pptx` archive for `deck` into memory.
pub(crate) fn write_package(deck: &Deck) -> Result<Vec<u8>, AppError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let slide_count = deck.slide_count();

    let mut put = |name: &str, body: &str| -> Result<(), AppError> {
        zip.start_file(name, options)?;
        zip.write_all(body.as_bytes())?;
        Ok(())
    };

    put("[Content_Types].xml", &content_types_xml(slide_count)?)?;
    put("_rels/.rels", &package_rels_xml())?;
    put("docProps/core.xml", &core_props_xml(deck))?;
    put("docProps/app.xml", &app_props_xml(slide_count)?)?;
    put("ppt/presentation.xml", &presentation_xml(slide_count)?)?;
    put("ppt/_rels/presentation.xml.rels", &presentation_rels_xml(slide_count))?;
    put("ppt/slideMasters/slideMaster1.xml", &slide_master_xml())?;
    put(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &slide_master_rels_xml(),
    )?;
    put("ppt/slideLayouts/slideLayout1.xml", &title_slide_layout_xml())?;
    put("ppt/slideLayouts/slideLayout2.xml", &title_and_content_layout_xml())?;
    put("ppt/slideLayouts/_rels/slideLayout1.xml.rels", &layout_rels_xml())?;
    put("ppt/slideLayouts/_rels/slideLayout2.xml.rels", &layout_rels_xml())?;
    put("ppt/theme/theme1.xml", THEME_XML)?;

    for (index, slide) in deck.slides().iter().enumerate() {
        let number = index + 1;
        let layout = match slide {
            DeckSlide::Cover { .. } => TITLE_SLIDE_LAYOUT,
            DeckSlide::Content { .. } => TITLE_AND_CONTENT_LAYOUT,
        };
        let layout_target = format!("../slideLayouts/{}", layout);
        put(&format!("ppt/slides/slide{}.xml", number), &slide_xml(slide)?)?;
        put(
            &format!("ppt/slides/_rels/slide{}.xml.rels", number),
            &relationships_xml(&[(REL_SLIDE_LAYOUT, layout_target.as_str())]),
        )?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn relationships_xml(targets: &[(&str, &str)]) -> String {
    let mut xml = String::with_capacity(256 + targets.len() * 160);
    xml.push_str(XML_DECLARATION);
    xml.push_str(r#"<Relationships xmlns=""#);
    xml.push_str(NS_PKG_RELS);
    xml.push_str(r#"">"#);
    for (index, (rel_type, target)) in targets.iter().enumerate() {
        xml.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="{}" Target="{}"/>"#,
            index + 1,
            rel_type,
            target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

fn content_types_xml(slide_count: usize) -> Result<String, AppError> {
    let mut xml = String::with_capacity(2048 + slide_count * 160);
    xml.push_str(XML_DECLARATION);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#);
    for layout in [TITLE_SLIDE_LAYOUT, TITLE_AND_CONTENT_LAYOUT] {
        write!(
            xml,
            r#"<Override PartName="/ppt/slideLayouts/{}" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#,
            layout
        )?;
    }
    for number in 1..=slide_count {
        write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
            number
        )?;
    }
    xml.push_str(r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#);
    xml.push_str("</Types>");
    Ok(xml)
}

fn package_rels_xml() -> String {
    relationships_xml(&[
        (REL_OFFICE_DOCUMENT, "ppt/presentation.xml"),
        (REL_CORE_PROPS, "docProps/core.xml"),
        (REL_EXTENDED_PROPS, "docProps/app.xml"),
    ])
}

fn core_props_xml(deck: &Deck) -> String {
    let timestamp = deck.created_at().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(deck.title())));
    xml.push_str("<dc:creator>slide_forge</dc:creator>");
    xml.push_str(&format!(
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
        timestamp
    ));
    xml.push_str(&format!(
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
        timestamp
    ));
    xml.push_str("</cp:coreProperties>");
    xml
}

fn app_props_xml(slide_count: usize) -> Result<String, AppError> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str("<Application>slide_forge</Application>");
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    xml.push_str("</Properties>");
    Ok(xml)
}

fn presentation_xml(slide_count: usize) -> Result<String, AppError> {
    let mut xml = String::with_capacity(1024 + slide_count * 48);
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
        NS_A, NS_R, NS_P
    )?;
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    if slide_count > 0 {
        xml.push_str("<p:sldIdLst>");
        for index in 0..slide_count {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                FIRST_SLIDE_ID + index,
                FIRST_SLIDE_REL + index
            )?;
        }
        xml.push_str("</p:sldIdLst>");
    }
    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
        SLIDE_WIDTH_EMU, SLIDE_HEIGHT_EMU
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

fn presentation_rels_xml(slide_count: usize) -> String {
    let slide_targets: Vec<String> = (1..=slide_count)
        .map(|number| format!("slides/slide{}.xml", number))
        .collect();

    let mut targets: Vec<(&str, &str)> = vec![
        (REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
        (REL_THEME, "theme/theme1.xml"),
    ];
    // Slide relationships must start at FIRST_SLIDE_REL
    targets.extend(slide_targets.iter().map(|t| (REL_SLIDE, t.as_str())));
    relationships_xml(&targets)
}

fn slide_master_rels_xml() -> String {
    relationships_xml(&[
        (REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
        (REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout2.xml"),
        (REL_THEME, "../theme/theme1.xml"),
    ])
}

fn layout_rels_xml() -> String {
    relationships_xml(&[(REL_SLIDE_MASTER, "../slideMasters/slideMaster1.xml")])
}

const GROUP_SHAPE_PROPS: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

/// A placeholder shape with explicit geometry, as layouts and masters carry.
fn placeholder_shape(id: u32, name: &str, ph: &str, geometry: (i64, i64, i64, i64)) -> String {
    let (x, y, cx, cy) = geometry;
    format!(
        concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
            r#"<p:nvPr>{ph}</p:nvPr></p:nvSpPr>"#,
            r#"<p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm></p:spPr>"#,
            r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#
        ),
        id = id,
        name = name,
        ph = ph,
        x = x,
        y = y,
        cx = cx,
        cy = cy
    )
}

const MASTER_TITLE_GEOMETRY: (i64, i64, i64, i64) = (457_200, 274_638, 8_229_600, 1_143_000);
const MASTER_BODY_GEOMETRY: (i64, i64, i64, i64) = (457_200, 1_600_200, 8_229_600, 4_525_963);
const COVER_TITLE_GEOMETRY: (i64, i64, i64, i64) = (685_800, 2_130_425, 7_772_400, 1_470_025);
const COVER_SUBTITLE_GEOMETRY: (i64, i64, i64, i64) = (1_371_600, 3_886_200, 6_400_800, 1_752_600);

fn slide_master_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        NS_A, NS_R, NS_P
    ));
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>"#);
    xml.push_str(GROUP_SHAPE_PROPS);
    xml.push_str(&placeholder_shape(
        2,
        "Title Placeholder 1",
        r#"<p:ph type="title"/>"#,
        MASTER_TITLE_GEOMETRY,
    ));
    xml.push_str(&placeholder_shape(
        3,
        "Text Placeholder 2",
        r#"<p:ph type="body" idx="1"/>"#,
        MASTER_BODY_GEOMETRY,
    ));
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#);
    xml.push_str(r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/><p:sldLayoutId id="2147483650" r:id="rId2"/></p:sldLayoutIdLst>"#);
    xml.push_str("<p:txStyles>");
    xml.push_str(r#"<p:titleStyle><a:lvl1pPr algn="ctr" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/><a:defRPr sz="4400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr></a:lvl1pPr></p:titleStyle>"#);
    xml.push_str(r#"<p:bodyStyle><a:lvl1pPr marL="342900" indent="-342900" algn="l" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/><a:defRPr sz="3200" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr></p:bodyStyle>"#);
    xml.push_str(r#"<p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr><a:lvl1pPr marL="0" algn="l" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr></p:otherStyle>"#);
    xml.push_str("</p:txStyles>");
    xml.push_str("</p:sldMaster>");
    xml
}

fn layout_xml(layout_type: &str, name: &str, shapes: &[String]) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="{}" preserve="1">"#,
        NS_A, NS_R, NS_P, layout_type
    ));
    xml.push_str(&format!(r#"<p:cSld name="{}"><p:spTree>"#, name));
    xml.push_str(GROUP_SHAPE_PROPS);
    for shape in shapes {
        xml.push_str(shape);
    }
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

fn title_slide_layout_xml() -> String {
    layout_xml(
        "title",
        "Title Slide",
        &[
            placeholder_shape(2, "Title 1", r#"<p:ph type="ctrTitle"/>"#, COVER_TITLE_GEOMETRY),
            placeholder_shape(
                3,
                "Subtitle 2",
                r#"<p:ph type="subTitle" idx="1"/>"#,
                COVER_SUBTITLE_GEOMETRY,
            ),
        ],
    )
}

fn title_and_content_layout_xml() -> String {
    layout_xml(
        "obj",
        "Title and Content",
        &[
            placeholder_shape(2, "Title 1", r#"<p:ph type="title"/>"#, MASTER_TITLE_GEOMETRY),
            placeholder_shape(
                3,
                "Content Placeholder 2",
                r#"<p:ph idx="1"/>"#,
                MASTER_BODY_GEOMETRY,
            ),
        ],
    )
}

const THEME_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme"><a:themeElements>"#,
    r#"<a:clrScheme name="Office">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
    r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    r#"<a:dk2><a:srgbClr val="1F497D"/></a:dk2>"#,
    r#"<a:lt2><a:srgbClr val="EEECE1"/></a:lt2>"#,
    r#"<a:accent1><a:srgbClr val="4F81BD"/></a:accent1>"#,
    r#"<a:accent2><a:srgbClr val="C0504D"/></a:accent2>"#,
    r#"<a:accent3><a:srgbClr val="9BBB59"/></a:accent3>"#,
    r#"<a:accent4><a:srgbClr val="8064A2"/></a:accent4>"#,
    r#"<a:accent5><a:srgbClr val="4BACC6"/></a:accent5>"#,
    r#"<a:accent6><a:srgbClr val="F79646"/></a:accent6>"#,
    r#"<a:hlink><a:srgbClr val="0000FF"/></a:hlink>"#,
    r#"<a:folHlink><a:srgbClr val="800080"/></a:folHlink>"#,
    r#"</a:clrScheme>"#,
    r#"<a:fontScheme name="Office">"#,
    r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    r#"</a:fontScheme>"#,
    r#"<a:fmtScheme name="Office">"#,
    r#"<a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst>"#,
    r#"<a:lnStyleLst><a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="25400"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="38100"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst>"#,
    r#"<a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst>"#,
    r#"<a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst>"#,
    r#"</a:fmtScheme>"#,
    r#"</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>"#
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlideRecord;
    use std::io::Read;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        out
    }

    fn sample_deck(count: usize) -> Deck {
        let records: Vec<SlideRecord> = (0..count)
            .map(|i| SlideRecord {
                header: Some(format!("Header {}", i + 1)),
                content: Some(format!("Content {}", i + 1)),
                references: None,
            })
            .collect();
        Deck::build("Solar Power", &records)
    }

    #[test]
    fn test_package_contains_one_part_per_slide() {
        let bytes = sample_deck(3).to_pptx().unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let slides: Vec<&str> = archive
            .file_names()
            .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
            .collect();
        assert_eq!(slides.len(), 4);

        for required in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideLayouts/slideLayout2.xml",
            "ppt/theme/theme1.xml",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(archive.file_names().any(|name| name == required), "missing {}", required);
        }
    }

    #[test]
    fn test_presentation_lists_slides_in_order() {
        let bytes = sample_deck(2).to_pptx().unwrap();
        let presentation = read_part(&bytes, "ppt/presentation.xml");
        assert!(presentation.contains(
            r#"<p:sldIdLst><p:sldId id="256" r:id="rId3"/><p:sldId id="257" r:id="rId4"/><p:sldId id="258" r:id="rId5"/></p:sldIdLst>"#
        ));

        let rels = read_part(&bytes, "ppt/_rels/presentation.xml.rels");
        assert!(rels.contains(r#"Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml""#));
        assert!(rels.contains(r#"Id="rId5" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide3.xml""#));

        let second = read_part(&bytes, "ppt/slides/slide2.xml");
        assert!(second.contains("<a:t>Header 1</a:t>"));
    }

    #[test]
    fn test_cover_uses_title_layout() {
        let bytes = sample_deck(1).to_pptx().unwrap();
        let cover_rels = read_part(&bytes, "ppt/slides/_rels/slide1.xml.rels");
        assert!(cover_rels.contains("../slideLayouts/slideLayout1.xml"));
        let content_rels = read_part(&bytes, "ppt/slides/_rels/slide2.xml.rels");
        assert!(content_rels.contains("../slideLayouts/slideLayout2.xml"));

        let cover = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(cover.contains("<a:t>SOLAR POWER</a:t>"));
    }

    #[test]
    fn test_content_types_and_props() {
        let bytes = sample_deck(2).to_pptx().unwrap();
        let types = read_part(&bytes, "[Content_Types].xml");
        assert_eq!(types.matches("presentationml.slide+xml").count(), 3);

        let app = read_part(&bytes, "docProps/app.xml");
        assert!(app.contains("<Slides>3</Slides>"));

        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Solar Power</dc:title>"));
    }
}
