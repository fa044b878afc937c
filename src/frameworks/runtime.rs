// Framework bootstrap for the headless host runtime.

use crate::domain::tuning::{GestureTuning, Tuning, Viewport};
use crate::domain::{SharedCooldown, WorldState};
use crate::frameworks::config;
use crate::interface_adapters::audio::AudioAdapter;
use crate::interface_adapters::stdio::{
    HostError, frame_reader, line_writer, world_update_serializer,
};
use crate::interface_adapters::utils::rng::GameRng;
use crate::use_cases::{
    FrameInput, Simulation, TickMode, WorldFanout, WorldTaskSettings, cooldown_timer_task,
    world_task,
};

use std::io::Result;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tokio::sync::{mpsc, watch};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Stdout carries the data stream; logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Everything a session needs besides its I/O handles.
#[derive(Debug, Clone)]
pub struct HostSettings {
    pub tuning: Tuning,
    pub gesture: GestureTuning,
    pub mode: TickMode,
    pub max_ticks: Option<u64>,
    pub seed: Option<u64>,
    pub cooldown_interval: Duration,
}

impl HostSettings {
    pub fn from_env() -> Self {
        Self {
            tuning: Tuning {
                viewport: Viewport::with_aspect(config::aspect_ratio()),
                ..Tuning::default()
            },
            gesture: GestureTuning::default(),
            mode: config::tick_mode(),
            max_ticks: config::max_ticks(),
            seed: config::rng_seed(),
            cooldown_interval: config::COOLDOWN_TIMER_INTERVAL,
        }
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            gesture: GestureTuning::default(),
            mode: TickMode::Lockstep,
            max_ticks: None,
            seed: None,
            cooldown_interval: config::COOLDOWN_TIMER_INTERVAL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub final_state: WorldState,
    pub world_updates: u64,
    pub sound_cues: u64,
}

/// Runs one session: frames from `reader`, JSON lines to `writer`.
///
/// Returns when input ends, the tick limit is hit or `shutdown` flips to true. Every task
/// spawned here has stopped by the time this returns, and the writer is handed back.
pub async fn run<R, W>(
    reader: R,
    writer: W,
    settings: HostSettings,
    shutdown: watch::Receiver<bool>,
) -> Result<(W, SessionSummary)>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    // Setup Channels
    // frame_tx/rx: every tracker frame goes to the single world task.
    let (frame_tx, frame_rx) = mpsc::channel::<FrameInput>(config::FRAME_CHANNEL_CAPACITY);
    // outlet: every world update goes to both the serializer and the audio adapter.
    let mut outlet = WorldFanout::new();
    let serializer_rx = outlet.subscribe(config::WORLD_UPDATE_CAPACITY);
    let audio_rx = outlet.subscribe(config::WORLD_UPDATE_CAPACITY);
    // out_tx/rx: serialized lines, written by one task so lines never interleave.
    let (out_tx, out_rx) = mpsc::channel::<String>(config::OUTPUT_CHANNEL_CAPACITY);
    // The cooldown timer outlives the world task by a moment, so it gets its own stop signal.
    let (timer_stop_tx, timer_stop_rx) = watch::channel(false);

    let rng = GameRng::from_config(settings.seed);
    tracing::info!(seed = rng.seed(), mode = ?settings.mode, "session starting");

    let cooldown = SharedCooldown::new(settings.tuning.special.cooldown);
    let timer = tokio::spawn(cooldown_timer_task(
        cooldown.clone(),
        settings.cooldown_interval,
        timer_stop_rx,
    ));

    let writer_task = tokio::spawn(line_writer(writer, out_rx));
    let serializer = tokio::spawn(world_update_serializer(serializer_rx, out_tx.clone()));
    let audio = AudioAdapter::spawn(audio_rx, out_tx);
    let reader_task = tokio::spawn(frame_reader(reader, frame_tx));

    let simulation = Simulation::new(settings.tuning, cooldown, rng);
    let final_state = world_task(
        frame_rx,
        outlet,
        simulation,
        WorldTaskSettings {
            mode: settings.mode,
            gesture: settings.gesture,
            max_ticks: settings.max_ticks,
        },
        shutdown,
    )
    .await;

    let _ = timer_stop_tx.send(true);
    let _ = timer.await;

    // The reader may be parked on a blocking stdin read after a tick limit or shutdown.
    reader_task.abort();
    match reader_task.await {
        Ok(Ok(frames)) => tracing::debug!(frames, "reader finished"),
        Ok(Err(HostError::InputClosed)) => tracing::debug!("reader stopped by world task"),
        Ok(Err(e)) => tracing::warn!(error = %e, "reader failed"),
        Err(e) if e.is_cancelled() => tracing::debug!("reader cancelled"),
        Err(e) => tracing::error!(error = %e, "reader task panicked"),
    }

    // The outlet was dropped with the world task, so both consumers drain and exit.
    let world_updates = match serializer.await {
        Ok(written) => written,
        Err(e) => {
            tracing::error!(error = %e, "serializer task failed");
            0
        }
    };
    let sound_cues = audio.shutdown().await;

    let writer = writer_task
        .await
        .map_err(|e| std::io::Error::other(format!("writer task failed: {e}")))??;

    tracing::info!(
        ticks = final_state.tick,
        score = final_state.score.value(),
        world_updates,
        sound_cues,
        "session finished"
    );

    Ok((
        writer,
        SessionSummary {
            final_state,
            world_updates,
            sound_cues,
        },
    ))
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();
    let settings = HostSettings::from_env();

    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match config::input_path() {
        Some(path) => {
            let file = tokio::fs::File::open(&path).await.inspect_err(|e| {
                tracing::error!(path = %path.display(), error = %e, "failed to open input");
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received");
            let _ = shutdown_tx.send(true);
        }
    });

    run(reader, tokio::io::stdout(), settings, shutdown_rx)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "session failed"))?;
    Ok(())
}
