//! The estimate form: dropdown fields, focus and the terminal loop.

use std::io;

use dropdown::{Dropdown, DropdownConfig, DropdownProps, Theme, Viewport, logical_width};
use formdom::{
    Edges, Element, Event, Key, Rect, Size, Style, Terminal, ViewportSize, translate,
};

use crate::form::{FieldSpec, FormValues, estimate_fields};
use crate::settings::Settings;

/// Builds per frame before giving up on a settled layout.
const MAX_PASSES: usize = 3;

struct Field {
    spec: FieldSpec,
    dropdown: Dropdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    Quit,
}

pub struct EstimatorApp {
    viewport: Viewport,
    cell_width_px: u32,
    fields: Vec<Field>,
    values: FormValues,
    focus: usize,
    theme: Theme,
    last_frame: Element,
}

impl EstimatorApp {
    pub fn new(viewport: &Viewport, settings: &Settings) -> Self {
        let config = DropdownConfig::new().query_retention(settings.query_retention);
        let fields: Vec<Field> = estimate_fields()
            .into_iter()
            .map(|spec| Field {
                spec,
                dropdown: Dropdown::with_config(viewport, config.clone()),
            })
            .collect();
        let theme = Theme::default();

        Self {
            viewport: viewport.clone(),
            cell_width_px: settings.cell_width_px,
            fields,
            values: FormValues::default(),
            focus: 0,
            theme,
            last_frame: Element::box_(),
        }
    }

    fn props(&self, index: usize) -> Option<DropdownProps> {
        self.fields.get(index).map(|f| f.spec.props(&self.values))
    }

    fn open_field(&self) -> Option<usize> {
        self.fields.iter().position(|f| f.dropdown.is_open())
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn view(&self) -> Element {
        let summary = self
            .fields
            .iter()
            .filter(|f| !f.spec.disabled)
            .map(|f| {
                let value = self.values.get(f.spec.name);
                let label = f
                    .spec
                    .options
                    .iter()
                    .find(|o| Some(&o.id) == value.as_ref())
                    .map(|o| o.label.as_str())
                    .unwrap_or("-");
                format!("{}: {}", f.spec.label, label)
            })
            .collect::<Vec<_>>()
            .join("   ");

        let mode = self
            .fields
            .first()
            .map(|f| format!("{:?}", f.dropdown.mode()))
            .unwrap_or_default();

        let fields = self.fields.iter().enumerate().map(|(i, field)| {
            let props = field.spec.props(&self.values);
            field.dropdown.element(&props, i == self.focus)
        });

        Element::col()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::new(1, 2, 1, 2))
            .gap(1)
            .style(Style::new().background(self.theme.background))
            .child(
                Element::text("House price estimate")
                    .style(Style::new().foreground(self.theme.primary).bold()),
            )
            .child(
                Element::text("Tab next field · Enter open · Esc close · q quit")
                    .style(Style::new().foreground(self.theme.muted)),
            )
            .children(fields)
            .child(Element::text(summary).style(Style::new().foreground(self.theme.text)))
            .child(
                Element::text(format!("viewport {}px, lists open as {mode}", self.viewport.width()))
                    .style(Style::new().foreground(self.theme.muted).dim()),
            )
    }

    /// Render until no dropdown asks for another pass.
    ///
    /// A freshly opened list needs its trigger's position from a laid-out
    /// frame, so opening always costs one extra pass.
    fn draw(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        for _ in 0..MAX_PASSES {
            let root = self.view();
            terminal.render(&root)?;
            let (width, height) = terminal.size();
            let screen = Rect::from_size(width, height);

            for field in &self.fields {
                let props = field.spec.props(&self.values);
                field.dropdown.sync_layout(&props, terminal.layout(), screen);
            }
            self.last_frame = root;

            let dirty = self.fields.iter().any(|f| f.dropdown.is_dirty());
            for field in &self.fields {
                field.dropdown.clear_dirty();
            }
            if !dirty {
                break;
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    fn dispatch(&mut self, event: &Event) -> Control {
        match event {
            Event::Key {
                key: Key::Char('c'),
                modifiers,
            } if modifiers.ctrl => return Control::Quit,
            Event::Resize { width, .. } => {
                let pixels = ViewportSize::query().ok().and_then(|size| size.pixel_width);
                self.viewport
                    .set_width(logical_width(*width, pixels, self.cell_width_px));
                return Control::Continue;
            }
            _ => {}
        }

        // An open list sees everything first.
        let open = self.open_field();
        if let Some(index) = open
            && let Some(props) = self.props(index)
            && self.fields[index].dropdown.handle_event(event, &props).is_handled()
        {
            return Control::Continue;
        }

        match event {
            Event::Key { key, .. } => self.on_key(*key, event, open.is_some()),
            Event::Click { target, .. } => {
                for index in 0..self.fields.len() {
                    if Some(index) == open {
                        continue;
                    }
                    let Some(props) = self.props(index) else {
                        continue;
                    };
                    if target.as_deref() == Some(props.name()) && !props.is_disabled() {
                        self.focus = index;
                    }
                    if self.fields[index].dropdown.handle_event(event, &props).is_handled() {
                        break;
                    }
                }
                Control::Continue
            }
            _ => Control::Continue,
        }
    }

    fn on_key(&mut self, key: Key, event: &Event, was_open: bool) -> Control {
        match key {
            Key::Tab => self.move_focus(1),
            Key::BackTab => self.move_focus(-1),
            _ if was_open => {}
            Key::Char('q') => return Control::Quit,
            _ => {
                if let Some(props) = self.props(self.focus) {
                    self.fields[self.focus].dropdown.handle_event(event, &props);
                }
            }
        }
        Control::Continue
    }

    /// Move focus to the next enabled field in `step` direction.
    fn move_focus(&mut self, step: isize) {
        let len = self.fields.len();
        for offset in 1..=len {
            let candidate = (self.focus as isize + step * offset as isize).rem_euclid(len as isize);
            let candidate = candidate as usize;
            if !self.fields[candidate].spec.disabled {
                self.focus = candidate;
                log::debug!("focus -> {}", self.fields[candidate].spec.name);
                return;
            }
        }
    }
}

pub fn run(settings: &Settings) -> io::Result<()> {
    let size = ViewportSize::query()?;
    let viewport = Viewport::new(logical_width(
        size.columns,
        size.pixel_width,
        settings.cell_width_px,
    ));
    log::info!(
        "starting at {}x{} cells, {}px wide",
        size.columns,
        size.rows,
        viewport.width()
    );

    let mut app = EstimatorApp::new(&viewport, settings);
    let mut terminal = Terminal::new()?;

    loop {
        app.draw(&mut terminal)?;
        for raw in terminal.poll(None)? {
            let Some(event) = translate(&raw, terminal.layout(), &app.last_frame) else {
                continue;
            };
            if app.dispatch(&event) == Control::Quit {
                log::info!("quit");
                return Ok(());
            }
        }
    }
}
