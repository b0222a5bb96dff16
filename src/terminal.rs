// SPDX-License-Identifier: GPL-3.0-only

//! Terminal demo of the control widgets
//!
//! Renders the shutter control as a compass needle at its current render
//! angle and drives it from the keyboard. The 16 ms poll loop doubles as
//! the render loop: each pass ticks the control, draws, and then lets the
//! control flush its deferred notifications.

use std::cell::RefCell;
use std::io::{self, stdout};
use std::rc::Rc;
use std::time::Instant;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal, backend::CrosstermBackend, buffer::Buffer, layout::Rect, style::Color,
    style::Style, widgets::Widget,
};
use tracing::info;

use crate::config::Config;
use crate::constants::ui;
use crate::controls::{
    ContentFit, Rotatable, ShutterControl, ShutterListener, Size, draw_transform,
};
use crate::sound::backend::RodioBackend;
use crate::sound::{SoundAction, SoundPool};

/// Intrinsic size of the needle drawing, in terminal cells
const NEEDLE_SPAN: u32 = 19;

/// Run the terminal demo
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Demo state shared between the key loop and the shutter listener
struct Feedback {
    status: String,
    sounds: Option<SoundPool<RodioBackend>>,
}

impl Feedback {
    fn play(&mut self, action: SoundAction) {
        if let Some(pool) = self.sounds.as_mut() {
            pool.play(action);
        }
    }
}

struct DemoListener {
    feedback: Rc<RefCell<Feedback>>,
}

impl ShutterListener for DemoListener {
    fn on_shutter_focus(&mut self, pressed: bool) {
        let mut feedback = self.feedback.borrow_mut();
        if pressed {
            feedback.status = "focusing...".to_string();
            feedback.play(SoundAction::FocusComplete);
        } else {
            feedback.status = "ready".to_string();
        }
    }

    fn on_shutter_click(&mut self) {
        let mut feedback = self.feedback.borrow_mut();
        feedback.status = "captured".to_string();
        feedback.play(SoundAction::Shutter);
    }

    fn on_shutter_long_press(&mut self) {
        let mut feedback = self.feedback.borrow_mut();
        feedback.status = "burst".to_string();
        feedback.play(SoundAction::BurstStart);
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();

    let sounds = match (config.sound_enabled, config.sound_theme_dir.clone()) {
        (true, Some(dir)) => match RodioBackend::new() {
            Ok(backend) => {
                let mut pool = SoundPool::new(backend, dir);
                pool.set_volume(config.sound_volume);
                pool.preload();
                Some(pool)
            }
            Err(e) => {
                info!(error = %e, "Audio output unavailable, demo runs silent");
                None
            }
        },
        _ => None,
    };

    let feedback = Rc::new(RefCell::new(Feedback {
        status: "ready".to_string(),
        sounds,
    }));

    let mut shutter = ShutterControl::new();
    shutter.set_long_press_threshold(config.long_press_threshold());
    shutter.set_listener(DemoListener {
        feedback: feedback.clone(),
    });
    shutter.icon_mut().icon_mut().set_dim_when_pressed(true);

    let mut animate = config.animate_orientation;
    let mut orientation = 0;

    loop {
        let frame = shutter.tick(Instant::now());

        let status = feedback.borrow().status.clone();
        let message = format!(
            "{} | angle {:>3} -> {:>3} | animation {} | \
             arrows/0-3 rotate | space tap | 'h' hold | 'a' animation | 'q' quit",
            status,
            frame.degree,
            orientation,
            if animate { "on" } else { "off" },
        );

        terminal.draw(|f| {
            let area = f.area();

            // Reserve bottom line for status
            let needle_area = Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height.saturating_sub(1),
            };
            f.render_widget(
                &NeedleWidget {
                    degree: frame.degree,
                    alpha: frame.alpha,
                },
                needle_area,
            );

            let status_area = Rect {
                x: area.x,
                y: area.height.saturating_sub(1),
                width: area.width,
                height: 1,
            };
            f.render_widget(
                StatusBar {
                    message: &message,
                },
                status_area,
            );
        })?;

        // Deferred notifications go out after the draw pass
        shutter.end_tick();

        if event::poll(ui::DEMO_TICK_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('q') => break,

                // Orientation: quarter turns or absolute quadrants
                KeyCode::Left => {
                    orientation += 90;
                    shutter.icon_mut().set_orientation_at(orientation, animate, Instant::now());
                }
                KeyCode::Right => {
                    orientation -= 90;
                    shutter.icon_mut().set_orientation_at(orientation, animate, Instant::now());
                }
                KeyCode::Char(c @ '0'..='3') => {
                    orientation = (c as i32 - '0' as i32) * 90;
                    shutter.icon_mut().set_orientation_at(orientation, animate, Instant::now());
                }

                // Shutter: a tap presses and releases within one tick,
                // 'h' holds the button until pressed again
                KeyCode::Char(' ') => {
                    let now = Instant::now();
                    if !shutter.is_pressed() {
                        shutter.press(now);
                        shutter.release(now);
                    }
                }
                KeyCode::Char('h') => {
                    let now = Instant::now();
                    if shutter.is_pressed() {
                        shutter.release(now);
                    } else {
                        shutter.press(now);
                    }
                }

                KeyCode::Char('a') => animate = !animate,
                _ => {}
            }
        }
    }

    Ok(())
}

/// Widget rendering the rotatable control as a compass needle
struct NeedleWidget {
    degree: i32,
    alpha: f32,
}

impl Widget for &NeedleWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = Size::new(area.width as u32, area.height as u32 * 2);
        let content = Size::new(NEEDLE_SPAN, NEEDLE_SPAN);
        let Some(transform) = draw_transform(viewport, content, ContentFit::Contain, self.degree)
        else {
            // Degenerate area, skip the frame
            return;
        };

        let color = if self.alpha >= ui::FULL_ALPHA {
            Color::White
        } else if self.alpha > ui::DISABLED_ALPHA {
            Color::Gray
        } else {
            Color::DarkGray
        };

        let center_x = area.x as f32 + area.width as f32 / 2.0;
        let center_y = area.y as f32 + area.height as f32 / 2.0;

        // The surface rotates content by the negated render angle, so a
        // growing angle turns the needle counter-clockwise on screen
        let radians = (-transform.rotation as f32).to_radians();
        let reach = NEEDLE_SPAN as f32 / 2.0 * transform.scale;

        let mut step = 0.0;
        while step <= reach {
            let x = center_x + radians.sin() * step;
            // Terminal cells are about twice as tall as wide
            let y = center_y - radians.cos() * step / 2.0;
            let (col, row) = (x.round() as i32, y.round() as i32);
            if col >= area.x as i32
                && col < (area.x + area.width) as i32
                && row >= area.y as i32
                && row < (area.y + area.height) as i32
                && let Some(cell) = buf.cell_mut((col as u16, row as u16))
            {
                cell.set_symbol(if step == 0.0 { "o" } else { "█" });
                cell.set_fg(color);
            }
            step += 0.5;
        }
    }
}

/// One-line status bar at the bottom of the screen
struct StatusBar<'a> {
    message: &'a str,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_string(
            area.x,
            area.y,
            self.message,
            Style::default().fg(Color::Black).bg(Color::Gray),
        );
    }
}
