//! SVG markup inspection.
//!
//! Icon markup is treated as opaque text everywhere except here. This module
//! reads just the root `<svg>` element to report the coordinate system and
//! the pixel size the icon asks to be drawn at.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::Error;

/// The `viewBox` of an SVG element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    /// Parse a `viewBox` attribute value.
    ///
    /// Accepts four finite numbers separated by whitespace and/or commas.
    /// Negative width or height is rejected.
    pub fn parse(value: &str) -> crate::Result<Self> {
        let numbers = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::parse::<f32>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::invalid_view_box(value))?;

        let &[min_x, min_y, width, height] = numbers.as_slice() else {
            return Err(Error::invalid_view_box(value));
        };

        let finite = [min_x, min_y, width, height].iter().all(|v| v.is_finite());
        if !finite || width < 0.0 || height < 0.0 {
            return Err(Error::invalid_view_box(value));
        }

        Ok(Self {
            min_x,
            min_y,
            width,
            height,
        })
    }

    /// Width divided by height, or `None` for a zero height.
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.height > 0.0).then(|| self.width / self.height)
    }
}

/// Size information read from the root `<svg>` element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SvgMetrics {
    /// Coordinate system, if declared.
    pub view_box: Option<ViewBox>,
    /// Requested width in pixels.
    pub width: Option<f32>,
    /// Requested height in pixels.
    pub height: Option<f32>,
}

impl SvgMetrics {
    /// Parse the root element of `markup`.
    ///
    /// Width and height come from the `width`/`height` attributes, overridden
    /// by `width:`/`height:` declarations in an inline `style` attribute.
    /// Only pixel (or unitless) lengths are reported.
    pub fn parse(markup: &str) -> crate::Result<Self> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Start(root)) | Ok(Event::Empty(root)) => return Self::from_root(&root),
                Ok(Event::Eof) => return Err(Error::markup("no root element")),
                Ok(Event::Text(_)) => return Err(Error::markup("text before root element")),
                // Declarations, comments, doctype, processing instructions
                Ok(_) => continue,
                Err(e) => return Err(Error::markup(e.to_string())),
            }
        }
    }

    fn from_root(root: &BytesStart<'_>) -> crate::Result<Self> {
        let name = root.local_name();
        if name.as_ref() != b"svg" {
            return Err(Error::markup(format!(
                "root element is <{}>, expected <svg>",
                String::from_utf8_lossy(name.as_ref())
            )));
        }

        let mut metrics = Self::default();
        let mut style: Option<String> = None;

        for attr in root.attributes() {
            let attr = attr.map_err(|e| Error::markup(e.to_string()))?;
            let value = String::from_utf8_lossy(&attr.value);

            match attr.key.local_name().as_ref() {
                b"viewBox" => metrics.view_box = Some(ViewBox::parse(&value)?),
                b"width" => metrics.width = parse_px(&value),
                b"height" => metrics.height = parse_px(&value),
                b"style" => style = Some(value.into_owned()),
                _ => {}
            }
        }

        if let Some(style) = style {
            for (property, value) in style_declarations(&style) {
                match &*property {
                    "width" => metrics.width = parse_px(value).or(metrics.width),
                    "height" => metrics.height = parse_px(value).or(metrics.height),
                    _ => {}
                }
            }
        }

        Ok(metrics)
    }

    /// The size the icon renders at.
    ///
    /// Uses the explicit width and height, falling back to the `viewBox`
    /// dimensions for whichever is missing.
    pub fn rendered_size(&self) -> Option<(f32, f32)> {
        let width = self.width.or(self.view_box.map(|vb| vb.width))?;
        let height = self.height.or(self.view_box.map(|vb| vb.height))?;
        Some((width, height))
    }
}

/// Split an inline style into lowercase property names and raw values.
fn style_declarations(style: &str) -> impl Iterator<Item = (Cow<'_, str>, &str)> {
    style.split(';').filter_map(|decl| {
        let (property, value) = decl.split_once(':')?;
        let property = property.trim();
        let property = if property.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(property.to_ascii_lowercase())
        } else {
            Cow::Borrowed(property)
        };
        Some((property, value.trim()))
    })
}

/// Parse a pixel or unitless length.
fn parse_px(value: &str) -> Option<f32> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim_end();
    number.parse().ok().filter(|v: &f32| v.is_finite() && *v >= 0.0)
}
