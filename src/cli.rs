// SPDX-License-Identifier: GPL-3.0-only

//! Command-line entry points for the demo binary

use std::time::{Duration, Instant};

use camera_controls::config::Config;
use camera_controls::controls::OrientationAnimator;
use camera_controls::sound::backend::RodioBackend;
use camera_controls::sound::{SoundAction, SoundPool};

/// Print one line per frame of an orientation transition.
pub fn spin(from: i32, to: i32, fps: u32) -> Result<(), Box<dyn std::error::Error>> {
    if fps == 0 {
        return Err("fps must be at least 1".into());
    }

    let start = Instant::now();
    let mut animator = OrientationAnimator::new();
    animator.set_orientation(from, false, start);
    if !animator.set_orientation(to, true, start) {
        println!("{} -> {}: nothing to do", from, to);
        return Ok(());
    }

    let frame_interval = Duration::from_secs(1) / fps;
    let mut now = start;
    println!("{:>8}  {:>6}", "time", "degree");
    loop {
        let tick = animator.advance(now);
        println!(
            "{:>5} ms  {:>6}",
            now.duration_since(start).as_millis(),
            tick.degree
        );
        if !tick.active {
            break;
        }
        now += frame_interval;
    }

    Ok(())
}

/// Play the sound effect for one camera action.
pub fn play(action: &str) -> Result<(), Box<dyn std::error::Error>> {
    let action =
        parse_action(action).ok_or_else(|| format!("unknown action: {}", action))?;

    let config = Config::load();
    let Some(theme_dir) = config.sound_theme_dir else {
        return Err("no sound theme directory configured".into());
    };

    let backend = RodioBackend::new()?;
    let mut pool = SoundPool::new(backend, theme_dir);
    pool.set_volume(config.sound_volume);
    pool.play(action);

    // Playback is fire-and-forget; give the mixer time to drain
    std::thread::sleep(Duration::from_secs(2));
    Ok(())
}

fn parse_action(name: &str) -> Option<SoundAction> {
    match name {
        "shutter" => Some(SoundAction::Shutter),
        "focus" => Some(SoundAction::FocusComplete),
        "video-start" => Some(SoundAction::VideoStart),
        "video-pause" => Some(SoundAction::VideoPause),
        "video-stop" => Some(SoundAction::VideoStop),
        "burst-start" => Some(SoundAction::BurstStart),
        "burst-loop" => Some(SoundAction::BurstLoop),
        "burst-end" => Some(SoundAction::BurstEnd),
        "panorama" => Some(SoundAction::Panorama),
        _ => None,
    }
}
