use anyhow::Result;
use crossbeam_channel::{Receiver, TrySendError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::{Command, Viewer};
use crate::gfx::{Bitmap, Size};
use crate::renderer::{CellData, DisplayManager, DisplayMode, FrameProcessor};
use crate::shared::constants::PREVIEW_QUEUE_CAPACITY;
use crate::sync::PeriodicTask;
use crate::utils::logger;

pub struct PreviewOptions {
    pub size: Size,
    pub tick: Duration,
    pub mode: DisplayMode,
}

/// Replay `commands` in the terminal until `q`, `Esc` or Ctrl-C.
///
/// A [`PeriodicTask`] renders one pass per tick and queues the bitmap; this
/// thread draws whatever arrives and watches the keyboard.
pub fn run_preview(commands: Arc<Vec<Command>>, options: PreviewOptions) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    let (frame_sender, frame_receiver) = crossbeam_channel::bounded::<Bitmap>(PREVIEW_QUEUE_CAPACITY);

    let mut viewer = Viewer::new(options.size, commands);
    let producer = PeriodicTask::start(options.tick, move || {
        let frame = viewer.render().clone();
        match frame_sender.try_send(frame) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                logger::debug("Preview queue full, dropping frame");
                true
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    });

    let result = draw_loop(&frame_receiver, &running, &options);

    drop(frame_receiver);
    let passes = producer.stop();
    logger::info(&format!("Preview stopped after {} render passes", passes));

    result
}

fn draw_loop(frames: &Receiver<Bitmap>, running: &AtomicBool, options: &PreviewOptions) -> Result<()> {
    let mut display = DisplayManager::new(options.mode)?;
    let processor = FrameProcessor::new(options.size);
    let mut cell_buffer = vec![CellData::default(); processor.width * processor.term_height()];
    let mut latest: Option<Bitmap> = None;

    logger::debug(&format!(
        "Starting preview: {}x{} canvas, {} terminal cells",
        options.size.width,
        options.size.height,
        cell_buffer.len()
    ));

    while running.load(Ordering::SeqCst) {
        if event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) if is_quit_key(&key) => break,
                Event::Resize(..) => {
                    display.invalidate();
                    if let Some(bitmap) = &latest {
                        processor.process_bitmap_into(bitmap, &mut cell_buffer);
                        display.render_diff(&cell_buffer, processor.width)?;
                    }
                }
                _ => {}
            }
        }

        match frames.recv_timeout(Duration::from_millis(20)) {
            Ok(bitmap) => {
                processor.process_bitmap_into(&bitmap, &mut cell_buffer);
                if let Err(e) = display.render_diff(&cell_buffer, processor.width) {
                    logger::error(&format!("Render error: {}", e));
                    return Err(e);
                }
                latest = Some(bitmap);
            }
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {}
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

/// Raw mode swallows SIGINT, so Ctrl-C arrives as a key.
fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
