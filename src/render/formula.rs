use crate::{
    foundation::core::Rgba8,
    render::svg::{escape_xml, paint_attrs},
    scene::model::Formula,
};

/// Typeset formula as an SVG fragment in its own local box `[0,0]..[width,height]`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypesetFormula {
    pub svg: String,
    pub width: f64,
    pub height: f64,
}

/// Math typesetting collaborator.
///
/// Returning `None` means "not available"; the caller skips the formula.
pub trait FormulaTypesetter: Send {
    fn typeset(
        &self,
        formula: &Formula,
        size: f64,
        color: Rgba8,
        font_family: &str,
    ) -> Option<TypesetFormula>;
}

/// No typesetter installed; every formula is skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTypesetter;

impl FormulaTypesetter for NoTypesetter {
    fn typeset(&self, _: &Formula, _: f64, _: Rgba8, _: &str) -> Option<TypesetFormula> {
        None
    }
}

/// Draws the formula's plain-text form in an italic serif run.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTypesetter;

impl PlainTypesetter {
    // Rough advance width of a serif glyph relative to font size.
    const ADVANCE: f64 = 0.55;
}

impl FormulaTypesetter for PlainTypesetter {
    fn typeset(
        &self,
        formula: &Formula,
        size: f64,
        color: Rgba8,
        _font_family: &str,
    ) -> Option<TypesetFormula> {
        let text = formula.plain.trim();
        if text.is_empty() || size <= 0.0 {
            return None;
        }
        let width = text.chars().count() as f64 * size * Self::ADVANCE;
        let height = size * 1.25;
        let svg = format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="serif" font-style="italic" font-size="{:.2}" fill="{}"{} text-anchor="middle">{}</text>"#,
            width / 2.0,
            size,
            size,
            color.to_hex(),
            paint_attrs(color),
            escape_xml(text),
        );
        Some(TypesetFormula { svg, width, height })
    }
}

/// Typesetter selection used by render settings and the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormulaMode {
    #[default]
    None,
    Plain,
}

impl FormulaMode {
    pub fn typesetter(self) -> Box<dyn FormulaTypesetter> {
        match self {
            Self::None => Box::new(NoTypesetter),
            Self::Plain => Box::new(PlainTypesetter),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/formula.rs"]
mod tests;
