//! # M3 Demo
//!
//! Headless walkthrough of the widget toolkit:
//!
//! Style sheet → Layout → Tap / Scroll → Animate → Paint commands → Tooltip
//!
//! Usage: `m3_demo [--style <path.toml>]`

use std::cell::RefCell;
use std::rc::Rc;

use m3_core::{
    InputEvent, MonospaceTextBackend, PaintCommand, PaintRecorder, Rect, UiError, UiResult, Widget,
};
use m3_widgets::{
    Badge, BadgePlacement, Item, SegmentedButtons, SegmentedSelection, StyleSheet, TabMode,
    TabRow, Text, Tooltip, TooltipAlign, TooltipAnchor, TooltipDirection, TooltipPlacement,
};

const FRAME_DT: f32 = 1.0 / 60.0;

static TABS: [Item<'static>; 6] = [
    Item::new("Home"),
    Item::new("Search"),
    Item::new("Library"),
    Item::new("Downloads"),
    Item::new("Settings"),
    Item::new("About"),
];

static FORMATS: [Item<'static>; 3] = [Item::new("Bold"), Item::new("Italic"), Item::new("Under")];

/// Parses `--style <path>`; anything else is rejected.
fn style_path() -> UiResult<Option<String>> {
    let mut args = std::env::args().skip(1);
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--style" => {
                let value = args
                    .next()
                    .ok_or(UiError::InvalidArgument("--style needs a path"))?;
                path = Some(value);
            }
            _ => return Err(UiError::InvalidArgument("usage: m3_demo [--style <path>]")),
        }
    }
    Ok(path)
}

fn load_sheet() -> UiResult<StyleSheet> {
    let mut sheet = match style_path()? {
        Some(path) => {
            println!("Loading style sheet: {path}");
            StyleSheet::load(&path)?
        }
        None => StyleSheet::default(),
    };

    // The monospace backend accepts any family; make sure every style has one.
    let family = sheet.font_family.clone().unwrap_or_else(|| "Mono".to_owned());
    for style in [
        &mut sheet.tabs.text_style,
        &mut sheet.segmented.text_style,
        &mut sheet.badge.text_style,
        &mut sheet.tooltip.text_style,
        &mut sheet.tooltip.title_style,
        &mut sheet.tooltip.body_style,
        &mut sheet.text,
    ] {
        style.family.get_or_insert_with(|| family.clone());
    }
    sheet.tabs.mode = TabMode::Scrollable;
    sheet.validate()?;
    Ok(sheet)
}

fn print_frame(title: &str, recorder: &PaintRecorder) {
    println!("── {title} ({} commands)", recorder.commands().len());
    for command in recorder.commands() {
        match command {
            PaintCommand::Rect {
                bounds,
                color,
                corner_radius,
            } => println!(
                "   rect  x={:>7.2} y={:>6.2} w={:>7.2} h={:>6.2} r={:.1} rgba=({:.2}, {:.2}, {:.2}, {:.2})",
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
                corner_radius,
                color.r,
                color.g,
                color.b,
                color.a
            ),
            PaintCommand::Text { text, x, y, .. } => {
                println!("   text  x={x:>7.2} y={y:>6.2} {text:?}");
            }
        }
    }
}

fn tap<W: Widget>(widget: &mut W, x: i32, y: i32) -> UiResult<bool> {
    widget.handle_event(&InputEvent::down(x, y))?;
    widget.handle_event(&InputEvent::up(x, y))
}

fn run() -> UiResult<()> {
    let sheet = load_sheet()?;
    let backend = MonospaceTextBackend::new();
    let mut recorder = PaintRecorder::new();

    // =========================================================================
    // TAB ROW
    // =========================================================================
    let selections = Rc::new(RefCell::new(Vec::new()));
    let mut tabs = TabRow::<_>::new(&backend, sheet.tabs.clone(), &TABS, Some(0))?;
    let sink = Rc::clone(&selections);
    tabs.set_on_select(Some(Box::new(move |index| {
        sink.borrow_mut().push(index);
        Ok(())
    })));
    tabs.layout(Rect::new(0.0, 0.0, 360.0, 48.0))?;
    println!(
        "Tab row: content {:.1}px in 360px, indicator {:?}",
        tabs.content_width(),
        tabs.indicator()
    );

    tabs.paint(&mut recorder)?;
    print_frame("tabs: initial", &recorder);

    tap(&mut tabs, 150, 24)?;
    let mut frames = 0;
    while tabs.step(FRAME_DT)? {
        frames += 1;
    }
    println!(
        "Selected {:?} after {frames} frames, indicator {:?}",
        tabs.selected(),
        tabs.indicator()
    );

    tabs.handle_event(&InputEvent::scroll(180, 24, 200, 0))?;
    println!("Scrolled to {:.1}", tabs.scroll());
    recorder.begin_frame();
    tabs.paint(&mut recorder)?;
    print_frame("tabs: scrolled", &recorder);
    println!("Tab callbacks: {:?}", selections.borrow());
    println!();

    // =========================================================================
    // SEGMENTED BUTTONS
    // =========================================================================
    let mut formats = [false, true, false];
    {
        let mut group = SegmentedButtons::new(
            &backend,
            sheet.segmented.clone(),
            &FORMATS,
            SegmentedSelection::Multi(&mut formats),
        )?;
        group.set_on_select(Some(Box::new(|index, selected| {
            println!("Segment {index} -> {selected}");
            Ok(())
        })));
        group.layout(Rect::new(0.0, 60.0, 300.0, 40.0))?;
        tap(&mut group, 50, 80)?;
        tap(&mut group, 150, 80)?;

        recorder.begin_frame();
        group.paint(&mut recorder)?;
        print_frame("segmented", &recorder);
    }
    println!("Format flags: {formats:?}");
    println!();

    // =========================================================================
    // TEXT + BADGE
    // =========================================================================
    let inbox = Rect::new(0.0, 110.0, 40.0, 20.0);
    let mut title = Text::new(&backend, sheet.text.clone(), "Inbox")?;
    title.layout(inbox)?;
    let mut badge = Badge::new(&backend, sheet.badge.clone(), Some("12"))?;
    let placed = badge.place(inbox, BadgePlacement::NAVIGATION)?;
    println!("Badge placed at {placed:?}");

    recorder.begin_frame();
    title.paint(&mut recorder)?;
    badge.paint(&mut recorder)?;
    print_frame("text + badge", &recorder);
    println!();

    // =========================================================================
    // TOOLTIP
    // =========================================================================
    let mut tip = Tooltip::new(
        &backend,
        sheet.tooltip.clone(),
        TooltipAnchor::Rect(inbox),
        TooltipPlacement::new(TooltipDirection::Up, TooltipAlign::Start),
        "3 unread messages",
    )?;
    tip.set_title(Some("Inbox"));
    tip.layout(Rect::new(0.0, 0.0, 360.0, 240.0))?;
    println!("Tooltip opened {:?} at {:?}", tip.direction(), tip.bounds());
    recorder.begin_frame();
    tip.paint(&mut recorder)?;
    print_frame("tooltip", &recorder);

    tabs.destroy()?;
    title.destroy()?;
    badge.destroy()?;
    tip.destroy()?;
    println!("Live fonts after teardown: {}", backend.live_fonts());
    Ok(())
}

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║           M3 WIDGETS - HEADLESS DEMO                             ║");
    println!("║           Tabs → Segments → Text → Badge → Tooltip               ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    if let Err(err) = run() {
        eprintln!("demo failed: {err}");
        std::process::exit(1);
    }
}
