//! The tooltip widget.

use m3_core::{
    Color, InputEvent, MeasureSpec, OwnedFont, PaintBackend, Rect, SemanticRole, Semantics, Size,
    TextBackend, TextMetrics, UiResult, Widget, WidgetFlags,
};

use super::placement::{self, TooltipAnchor, TooltipContent, TooltipDirection, TooltipPlacement};
use super::style::{TooltipStyle, TooltipVariant};

/// Fonts for one style: `(title, body)`. Plain tooltips hold no title font.
fn create_fonts<B: TextBackend>(
    backend: &B,
    style: &TooltipStyle,
) -> UiResult<(OwnedFont, OwnedFont)> {
    match style.variant {
        TooltipVariant::Plain => Ok((
            OwnedFont::default(),
            OwnedFont::create(backend, &style.text_style)?,
        )),
        TooltipVariant::Rich => {
            let mut title = OwnedFont::create(backend, &style.title_style)?;
            match OwnedFont::create(backend, &style.body_style) {
                Ok(body) => Ok((title, body)),
                Err(err) => {
                    if let Err(cleanup) = title.release(backend) {
                        tracing::warn!("discarding tooltip title font failed: {}", cleanup);
                    }
                    Err(err)
                }
            }
        }
    }
}

/// Plain or rich tooltip positioned next to an anchor.
///
/// `layout` receives the overlay region the tooltip may occupy; the
/// tooltip sizes itself to its text and places itself inside that region.
pub struct Tooltip<'a, B: TextBackend> {
    backend: B,
    style: TooltipStyle,
    anchor: TooltipAnchor,
    placement: TooltipPlacement,
    title: Option<&'a str>,
    body: &'a str,
    title_font: OwnedFont,
    body_font: OwnedFont,
    content: Option<TooltipContent>,
    bounds: Rect,
    direction: TooltipDirection,
    flags: WidgetFlags,
}

impl<'a, B: TextBackend> Tooltip<'a, B> {
    /// Creates a tooltip showing `body`.
    ///
    /// # Errors
    ///
    /// Style validation (families are required), a bad anchor, or font
    /// creation failures.
    pub fn new(
        backend: B,
        style: TooltipStyle,
        anchor: TooltipAnchor,
        placement: TooltipPlacement,
        body: &'a str,
    ) -> UiResult<Self> {
        style.validate(true)?;
        anchor.rect()?;
        let (title_font, body_font) = create_fonts(&backend, &style)?;
        Ok(Self {
            backend,
            anchor,
            placement,
            title: None,
            body,
            title_font,
            body_font,
            content: None,
            bounds: Rect::ZERO,
            direction: placement.direction,
            flags: WidgetFlags::NONE,
            style,
        })
    }

    /// Sets the title. Plain tooltips ignore it.
    pub fn set_title(&mut self, title: Option<&'a str>) {
        self.title = title;
        self.content = None;
    }

    /// Replaces the body.
    pub fn set_body(&mut self, body: &'a str) {
        self.body = body;
        self.content = None;
    }

    /// Moves the tooltip to a new anchor. Takes effect on the next layout.
    ///
    /// # Errors
    ///
    /// `Range` for an anchor rect with negative extent.
    pub fn set_anchor(&mut self, anchor: TooltipAnchor, placement: TooltipPlacement) -> UiResult<()> {
        anchor.rect()?;
        self.anchor = anchor;
        self.placement = placement;
        Ok(())
    }

    /// Replaces the style and its fonts.
    ///
    /// New fonts are created before the old ones are released; if creation
    /// fails nothing changes. A failure releasing the old fonts is reported
    /// after the swap.
    ///
    /// # Errors
    ///
    /// Style validation or font failures.
    pub fn set_style(&mut self, style: TooltipStyle) -> UiResult<()> {
        style.validate(true)?;
        let (title, body) = create_fonts(&self.backend, &style)?;
        let mut old_title = std::mem::replace(&mut self.title_font, title);
        let mut old_body = std::mem::replace(&mut self.body_font, body);
        self.style = style;
        self.content = None;

        let title_released = old_title.release(&self.backend);
        let body_released = old_body.release(&self.backend);
        title_released.and(body_released)
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &TooltipStyle {
        &self.style
    }

    /// Bounds resolved by the last layout.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Side the last layout opened on.
    #[must_use]
    pub fn direction(&self) -> TooltipDirection {
        self.direction
    }

    /// Text metrics, measured on first use.
    ///
    /// # Errors
    ///
    /// Measurement failures, or `State` after `destroy`.
    pub fn content(&mut self) -> UiResult<TooltipContent> {
        if let Some(content) = self.content {
            return Ok(content);
        }

        let body = if self.body.is_empty() {
            None
        } else {
            Some(self.backend.measure_text(self.body_font.handle()?, self.body)?)
        };
        let title = match (self.style.variant, self.title) {
            (TooltipVariant::Rich, Some(title)) if !title.is_empty() => {
                Some(self.backend.measure_text(self.title_font.handle()?, title)?)
            }
            _ => None,
        };

        let content = TooltipContent { title, body };
        self.content = Some(content);
        Ok(content)
    }

    fn draw_line(
        &self,
        painter: &mut dyn PaintBackend,
        font: &OwnedFont,
        text: &str,
        y: f32,
        color: Color,
    ) -> UiResult<()> {
        let x = self.bounds.x + self.style.padding.left;
        painter.draw_text(font.handle()?, text, x, y, color)
    }
}

impl<'a, B: TextBackend> Widget for Tooltip<'a, B> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> UiResult<Size> {
        width.validate()?;
        height.validate()?;
        let content = self.content()?;
        let size = placement::content_size(&self.style, &content)?;
        Ok(Size::new(width.resolve(size.width), height.resolve(size.height)))
    }

    fn layout(&mut self, overlay: Rect) -> UiResult<()> {
        overlay.validate()?;
        let content = self.content()?;
        let size = placement::content_size(&self.style, &content)?;
        let (bounds, direction) =
            placement::compute_bounds(&self.style, self.anchor, self.placement, overlay, size)?;
        self.bounds = bounds;
        self.direction = direction;
        tracing::debug!("tooltip placed {:?} at {:?}", direction, bounds);
        Ok(())
    }

    fn paint(&mut self, painter: &mut dyn PaintBackend) -> UiResult<()> {
        if self.bounds.is_degenerate() {
            return Ok(());
        }
        let content = self.content()?;
        painter.draw_rect(
            self.bounds,
            self.style.background_color,
            self.style.corner_radius,
        )?;

        let mut y = self.bounds.y + self.style.padding.top;
        let body_color = match self.style.variant {
            TooltipVariant::Plain => self.style.text_style.color,
            TooltipVariant::Rich => self.style.body_style.color,
        };
        if let (Some(title), Some(metrics)) = (self.title, content.title) {
            y += metrics.baseline;
            self.draw_line(painter, &self.title_font, title, y, self.style.title_style.color)?;
            y += metrics.height - metrics.baseline + self.style.title_body_spacing;
        }
        if let Some(TextMetrics { baseline, .. }) = content.body {
            self.draw_line(painter, &self.body_font, self.body, y + baseline, body_color)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, _event: &InputEvent) -> UiResult<bool> {
        Ok(false)
    }

    fn semantics(&self) -> Semantics {
        Semantics {
            role: SemanticRole::Text,
            label: Some(self.body.to_owned()),
            hint: self.title.map(str::to_owned),
            ..Semantics::default()
        }
    }

    fn destroy(&mut self) -> UiResult<()> {
        let title_released = self.title_font.release(&self.backend);
        let body_released = self.body_font.release(&self.backend);
        self.content = None;
        self.bounds = Rect::ZERO;
        title_released.and(body_released)
    }

    fn flags(&self) -> WidgetFlags {
        self.flags
    }

    fn set_flags(&mut self, flags: WidgetFlags) {
        self.flags = flags;
    }
}

impl<'a, B: TextBackend> Drop for Tooltip<'a, B> {
    fn drop(&mut self) {
        for font in [&mut self.title_font, &mut self.body_font] {
            if let Err(err) = font.release(&self.backend) {
                tracing::warn!("tooltip font release failed: {}", err);
            }
        }
    }
}
