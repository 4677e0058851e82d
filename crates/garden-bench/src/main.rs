use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use tab_garden::engine::Garden;
use tab_garden::layout::GridLayout;
use tab_garden::runner::world_viewport;
use tab_garden::surface::BufferSurface;
use tab_garden::tabs::Tab;

#[derive(Parser, Debug)]
#[command(
    name = "garden-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Grow-and-raster benchmark for the garden engine"
)]
struct BenchCli {
    /// How long to run the benchmark.
    #[arg(
        short = 'd',
        long = "duration",
        value_name = "SECONDS",
        default_value_t = 10.0
    )]
    duration_seconds: f64,

    /// Target frames per second. Used to pace rendering so comparisons are repeatable.
    #[arg(short = 'f', long = "fps", value_name = "FPS", default_value_t = 60.0)]
    target_fps: f64,

    /// Number of synthetic plants to grow.
    #[arg(short = 'p', long = "plants", value_name = "COUNT", default_value_t = 64)]
    plants: usize,
}

struct BenchConfig {
    duration: Duration,
    target_fps: f64,
    frame_budget: Duration,
    plants: usize,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(0.5..=600.0).contains(&cli.duration_seconds) {
            return Err("duration must be between 0.5 and 600 seconds".to_string());
        }
        if !(1.0..=240.0).contains(&cli.target_fps) {
            return Err("fps must be between 1 and 240".to_string());
        }
        if !(1..=4096).contains(&cli.plants) {
            return Err("plant count must be between 1 and 4096".to_string());
        }
        Ok(Self {
            duration: Duration::from_secs_f64(cli.duration_seconds),
            target_fps: cli.target_fps,
            frame_budget: Duration::from_secs_f64(1.0 / cli.target_fps),
            plants: cli.plants,
        })
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let bench_result = run_benchmark(&mut terminal, &config);

    terminal.show_cursor()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
    terminal::disable_raw_mode()?;

    let stats = bench_result?;
    println!("{}", stats.final_report(&config));

    Ok(())
}

type BenchTerminal = Terminal<CrosstermBackend<Stdout>>;

fn synthetic_tabs(count: usize) -> Vec<Tab> {
    (0..count as u64)
        .map(|id| Tab {
            id,
            title: format!("synthetic tab {id}"),
            url: format!("https://bench.example/{id}"),
        })
        .collect()
}

fn run_benchmark(terminal: &mut BenchTerminal, config: &BenchConfig) -> io::Result<BenchStats> {
    // Fixed seed: identical phase rates run to run, so numbers compare.
    let mut garden = Garden::with_seed(GridLayout::default(), 0x67617264);
    garden.plant(&synthetic_tabs(config.plants));
    let size = terminal
        .size()
        .map_err(|err| io::Error::other(err.to_string()))?;
    let (width, height) = world_viewport(size.width, size.height);
    garden.resize(width, height);

    let mut stats = BenchStats::new();
    let mut exit_reason = ExitReason::Completed;

    loop {
        let frame_start = Instant::now();
        garden.grow();
        let mut cells_drawn: u64 = 0;
        terminal
            .draw(|frame| {
                cells_drawn = draw_frame(frame, &garden, &stats, config);
            })
            .map_err(|err| io::Error::other(err.to_string()))?;
        let draw_time = frame_start.elapsed();
        stats.record_frame(cells_drawn, draw_time);

        if stats.elapsed() >= config.duration {
            break;
        }

        match poll_for_control(config.frame_budget.saturating_sub(draw_time))? {
            Control::Run => {}
            Control::Abort => {
                exit_reason = ExitReason::UserAbort;
                break;
            }
            Control::Resized(columns, rows) => {
                let (width, height) = world_viewport(columns, rows);
                garden.resize(width, height);
            }
        }
    }

    stats.exit_reason = exit_reason;
    stats.mark_completed();
    Ok(stats)
}

fn draw_frame(frame: &mut Frame, garden: &Garden, stats: &BenchStats, config: &BenchConfig) -> u64 {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return 0;
    }

    {
        let mut surface = BufferSurface::new(area, frame.buffer_mut());
        garden.draw(&mut surface);
    }

    let overlay_lines = build_overlay_lines(stats, config);
    if let Some(overlay_area) = overlay_area(area, &overlay_lines) {
        frame.render_widget(
            Paragraph::new(overlay_lines.join("\n"))
                .style(Style::default().fg(Color::White).bg(Color::Black)),
            overlay_area,
        );
    }

    area.width as u64 * area.height as u64
}

fn overlay_area(window_area: Rect, lines: &[String]) -> Option<Rect> {
    let available_width = window_area.width.saturating_sub(2);
    let available_height = window_area.height.saturating_sub(2);
    if available_width < 8 || available_height < 4 {
        return None;
    }
    let text_width = lines.iter().map(|line| line.len() as u16).max().unwrap_or(0);
    let width = text_width.clamp(8, available_width);
    let height = (lines.len() as u16).clamp(1, available_height);
    Some(Rect {
        x: window_area.x + 1,
        y: window_area.y + 1,
        width,
        height,
    })
}

fn build_overlay_lines(stats: &BenchStats, config: &BenchConfig) -> Vec<String> {
    let elapsed = stats.elapsed().as_secs_f64();
    let duration_target = config.duration.as_secs_f64();
    let progress = if duration_target > 0.0 {
        (elapsed / duration_target).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let fps_avg = if elapsed > 0.0 {
        stats.frame_count as f64 / elapsed
    } else {
        0.0
    };

    vec![
        "== Garden Bench ==".to_string(),
        format!("plants {:>5}", config.plants),
        format!(
            "elapsed {:>5.1}/{:>5.1}s ({:>3.0}%)",
            elapsed,
            duration_target,
            progress * 100.0
        ),
        format!(
            "frames {:>8} | avg fps {:>5.1} / target {:>5.1}",
            stats.frame_count, fps_avg, config.target_fps
        ),
        format!(
            "frame ms avg {:>6.2} | best {:>5.2} | worst {:>5.2}",
            stats.average_frame_ms(),
            stats.fastest_frame_ms(),
            stats.slowest_frame_ms()
        ),
        "press q / esc / ctrl+c to stop".to_string(),
    ]
}

struct BenchStats {
    start: Instant,
    completed_at: Option<Instant>,
    frame_count: u64,
    cell_updates: u64,
    total_draw_time: Duration,
    fastest_frame: Duration,
    slowest_frame: Duration,
    exit_reason: ExitReason,
}

impl BenchStats {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            completed_at: None,
            frame_count: 0,
            cell_updates: 0,
            total_draw_time: Duration::ZERO,
            fastest_frame: Duration::MAX,
            slowest_frame: Duration::ZERO,
            exit_reason: ExitReason::Completed,
        }
    }

    fn elapsed(&self) -> Duration {
        match self.completed_at {
            Some(done) => done.duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    fn mark_completed(&mut self) {
        self.completed_at = Some(Instant::now());
    }

    fn record_frame(&mut self, cells: u64, draw_time: Duration) {
        self.frame_count = self.frame_count.saturating_add(1);
        self.cell_updates = self.cell_updates.saturating_add(cells);
        self.total_draw_time += draw_time;
        if draw_time < self.fastest_frame {
            self.fastest_frame = draw_time;
        }
        if draw_time > self.slowest_frame {
            self.slowest_frame = draw_time;
        }
    }

    fn average_frame_ms(&self) -> f64 {
        if self.frame_count == 0 {
            return 0.0;
        }
        (self.total_draw_time.as_secs_f64() / self.frame_count as f64) * 1_000.0
    }

    fn fastest_frame_ms(&self) -> f64 {
        if self.frame_count == 0 {
            return 0.0;
        }
        self.fastest_frame.as_secs_f64() * 1_000.0
    }

    fn slowest_frame_ms(&self) -> f64 {
        if self.frame_count == 0 {
            return 0.0;
        }
        self.slowest_frame.as_secs_f64() * 1_000.0
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        let elapsed = self.elapsed().as_secs_f64();
        let fps_avg = if elapsed > 0.0 {
            self.frame_count as f64 / elapsed
        } else {
            0.0
        };
        let cells_per_second = if elapsed > 0.0 {
            self.cell_updates as f64 / elapsed
        } else {
            0.0
        };

        indoc::formatdoc!(
            r#"
            Garden bench {status}.
            Plants: {plants}
            Duration: {elapsed:.2}s (target {target:.2}s)
            Frames: {frames} | Avg FPS: {fps:.1} (target {target_fps:.1})
            Avg frame: {avg:.2} ms | Best: {best:.2} ms | Worst: {worst:.2} ms
            Cell updates: {cells} total (~{cells_per_sec:.0}/s)
            "#,
            status = self.exit_reason.describe(),
            plants = config.plants,
            elapsed = elapsed,
            target = config.duration.as_secs_f64(),
            frames = self.frame_count,
            fps = fps_avg,
            target_fps = config.target_fps,
            avg = self.average_frame_ms(),
            best = self.fastest_frame_ms(),
            worst = self.slowest_frame_ms(),
            cells = self.cell_updates,
            cells_per_sec = cells_per_second,
        )
    }
}

#[derive(Copy, Clone)]
enum ExitReason {
    Completed,
    UserAbort,
}

impl ExitReason {
    fn describe(self) -> &'static str {
        match self {
            ExitReason::Completed => "completed full duration",
            ExitReason::UserAbort => "stopped by user",
        }
    }
}

enum Control {
    Run,
    Abort,
    Resized(u16, u16),
}

fn poll_for_control(wait: Duration) -> io::Result<Control> {
    if !event::poll(wait)? {
        return Ok(Control::Run);
    }
    let mut control = Control::Run;
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(
                    key.code,
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
                ) {
                    return Ok(Control::Abort);
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(Control::Abort);
                }
            }
            Event::Resize(columns, rows) => {
                control = Control::Resized(columns, rows);
            }
            _ => {}
        }
        if !event::poll(Duration::ZERO)? {
            break;
        }
    }
    Ok(control)
}
