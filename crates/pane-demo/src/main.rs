use std::io::{Read, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use pane_android::{
    DisplayMetrics, FragmentHost, HostComponent, HostPaths, SketchSurface, SurfaceConfig,
    SystemUiVisibility, WallpaperHost, WatchFaceHost,
};
use pane_engine::input::{KeyCode, KeyEvent, TouchEvent};
use pane_engine::logging::{init_logging, LoggingConfig};
use pane_engine::Sketch;

/// Counts frames and remembers when they happened.
struct Pulse {
    frames: AtomicU64,
    limit: Option<u64>,
    times: Mutex<Vec<Instant>>,
}

impl Pulse {
    fn new(limit: Option<u64>) -> Self {
        Self {
            frames: AtomicU64::new(0),
            limit,
            times: Mutex::new(Vec::new()),
        }
    }

    fn frames(&self) -> u64 {
        self.frames.load(Ordering::SeqCst)
    }

    /// Mean frames per second over everything drawn so far.
    fn measured_rate(&self) -> Option<f64> {
        let times = self.times.lock().ok()?;
        let (first, last) = (times.first()?, times.last()?);
        let span = last.duration_since(*first).as_secs_f64();
        (times.len() > 1 && span > 0.0).then(|| (times.len() - 1) as f64 / span)
    }
}

impl Sketch for Pulse {
    fn on_started(&self) {
        log::info!("pulse started");
    }

    fn is_finished(&self) -> bool {
        self.limit.is_some_and(|limit| self.frames() >= limit)
    }

    fn draw_frame(&self) {
        self.frames.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut times) = self.times.lock() {
            times.push(Instant::now());
        }
    }

    fn on_touch_event(&self, event: &TouchEvent) -> bool {
        log::info!("touch {:?} at {:?}", event.action, event.action_pointer());
        true
    }

    fn on_key_down(&self, code: KeyCode, _event: &KeyEvent) -> bool {
        log::info!("key down {code}");
        code != KeyCode::Back
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let fps: f32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().with_context(|| format!("invalid frame rate {arg:?}"))?,
        None => 30.0,
    };

    let paths = prepare_dirs().context("failed to prepare sketch directories")?;

    println!();
    println!("  pane demo  ·  {fps} fps target");
    println!();

    run_fragment(&paths, fps)?;
    run_wallpaper(&paths, fps)?;
    run_watchface(&paths, fps)?;

    Ok(())
}

fn prepare_dirs() -> Result<HostPaths> {
    let root = std::env::temp_dir().join("pane-demo");
    let paths = HostPaths {
        files_dir: root.join("files"),
        assets_dir: root.join("assets"),
    };

    std::fs::create_dir_all(&paths.files_dir)?;
    std::fs::create_dir_all(&paths.assets_dir)?;

    let mut readme = std::fs::File::create(paths.assets_dir.join("readme.txt"))?;
    writeln!(readme, "bundled with the pane demo")?;

    Ok(paths)
}

fn run_fragment(paths: &HostPaths, fps: f32) -> Result<()> {
    let sketch = Arc::new(Pulse::new(None));
    let host = Arc::new(FragmentHost::new(paths.clone(), DisplayMetrics::default()));
    let surface = SketchSurface::new(&sketch, Arc::clone(&host), SurfaceConfig::default().with_frame_rate(fps))
        .context("failed to create fragment surface")?;

    let view = surface.init_view(720, 720);
    surface.set_system_ui_visibility(SystemUiVisibility::immersive_fullscreen());
    log::info!("fragment root view {view:?}");

    surface.on_resume()?;
    thread::sleep(Duration::from_millis(500));

    surface.on_pause();
    let paused_at = sketch.frames();
    thread::sleep(Duration::from_millis(200));
    log::info!("frames while paused: {}", sketch.frames() - paused_at);

    surface.on_resume()?;
    surface.on_touch_event(&pane_android::input::MotionEventData {
        action: 0,
        pointers: vec![pane_engine::input::TouchPointer { id: 0, x: 360.0, y: 360.0, pressure: 1.0 }],
        event_time_ms: 0,
    });
    thread::sleep(Duration::from_millis(300));

    let mut notes = String::new();
    surface
        .open_asset("readme.txt")
        .context("failed to open bundled asset")?
        .read_to_string(&mut notes)?;
    log::info!("asset says: {}", notes.trim());

    surface.on_destroy();
    report("fragment", &sketch);
    println!("    activity finished: {}", host.is_finished());
    Ok(())
}

fn run_wallpaper(paths: &HostPaths, fps: f32) -> Result<()> {
    let sketch = Arc::new(Pulse::new(None));
    let host = Arc::new(WallpaperHost::new(paths.clone(), DisplayMetrics::default(), false));
    let surface = SketchSurface::new(&sketch, host, SurfaceConfig::default().with_frame_rate(fps))
        .context("failed to create wallpaper surface")?;

    surface.init_view(0, 0);
    for visible in [true, false, true] {
        surface.on_visibility_changed(visible)?;
        thread::sleep(Duration::from_millis(250));
    }

    surface.on_destroy();
    report("wallpaper", &sketch);
    Ok(())
}

fn run_watchface(paths: &HostPaths, fps: f32) -> Result<()> {
    let sketch = Arc::new(Pulse::new(Some(20)));
    let display = DisplayMetrics { width: 454, height: 454, density: 2.0 };
    let host = Arc::new(WatchFaceHost::new(paths.clone(), display, true));
    let surface = SketchSurface::new(&sketch, Arc::clone(&host), SurfaceConfig::default().with_frame_rate(fps))
        .context("failed to create watchface surface")?;

    surface.on_visibility_changed(true)?;
    host.set_ambient(true);

    let deadline = Instant::now() + Duration::from_secs(5);
    while !surface.is_stopped() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(10));
    }

    report("watchface", &sketch);
    println!(
        "    loop status: {:?}, invalidations: {}",
        surface.status(),
        host.invalidations()
    );
    Ok(())
}

fn report(name: &str, sketch: &Pulse) {
    match sketch.measured_rate() {
        Some(rate) => println!("  {name:<10} {:>4} frames  ~{rate:.1} fps", sketch.frames()),
        None => println!("  {name:<10} {:>4} frames", sketch.frames()),
    }
}
