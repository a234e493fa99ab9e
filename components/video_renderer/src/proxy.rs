//! Thread-affinity proxy (spec §4.8): `Renderer` implementations that bind
//! to a native surface must only ever be touched from the thread that
//! created them. `RendererProxy` owns the real backend on a dedicated
//! thread and forwards every `Renderer` call across a command channel,
//! following the same named-worker-thread-plus-command-channel shape
//! `media_pipeline`'s `PlaybackController` uses for its decode threads.
//!
//! A call already running on the render thread (e.g. the render thread
//! re-entering through a callback) would otherwise deadlock waiting on its
//! own reply channel, so the backend is held behind a shared lock instead
//! of being moved wholesale into the worker closure: `call` compares
//! `thread::current().id()` against the render thread's id and, on a
//! match, locks and invokes the backend inline rather than round-tripping
//! through the channel.

use crate::error::VideoRenderError;
use crossbeam_channel::{bounded, Sender};
use mediacore_shared_types::{MediaResult, Renderer, VideoFrame};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle, ThreadId};
use tracing::warn;

enum Command {
    Init {
        window_handle: usize,
        width: u32,
        height: u32,
        reply: Sender<MediaResult<()>>,
    },
    RenderFrame {
        frame: VideoFrame,
        reply: Sender<MediaResult<()>>,
    },
    Present {
        reply: Sender<MediaResult<()>>,
    },
    ClearCaches {
        reply: Sender<MediaResult<()>>,
    },
    OnResize {
        width: u32,
        height: u32,
        reply: Sender<MediaResult<()>>,
    },
    GetName {
        reply: Sender<String>,
    },
    Shutdown,
}

fn dispatch(backend: &mut dyn Renderer, command: Command) {
    match command {
        Command::Init { window_handle, width, height, reply } => {
            let _ = reply.send(backend.init(window_handle, width, height));
        }
        Command::RenderFrame { frame, reply } => {
            let _ = reply.send(backend.render_frame(&frame));
        }
        Command::Present { reply } => {
            let _ = reply.send(backend.present());
        }
        Command::ClearCaches { reply } => {
            let _ = reply.send(backend.clear_caches());
        }
        Command::OnResize { width, height, reply } => {
            let _ = reply.send(backend.on_resize(width, height));
        }
        Command::GetName { reply } => {
            let _ = reply.send(backend.renderer_name());
        }
        Command::Shutdown => unreachable!("Shutdown is handled by the caller"),
    }
}

/// Forwards every [`Renderer`] call onto the single thread that owns the
/// wrapped backend, bypassing the channel when already on that thread.
pub struct RendererProxy {
    backend: Arc<Mutex<Box<dyn Renderer>>>,
    commands: Sender<Command>,
    handle: Option<JoinHandle<()>>,
    owner: ThreadId,
    cached_name: Mutex<Option<String>>,
}

impl RendererProxy {
    /// Spawns the render thread, sharing ownership of `backend` with it.
    pub fn new(backend: Box<dyn Renderer>) -> Self {
        let backend = Arc::new(Mutex::new(backend));
        let (tx, rx) = crossbeam_channel::unbounded::<Command>();

        let worker_backend = Arc::clone(&backend);
        let handle = std::thread::Builder::new()
            .name("mediacore-render".to_string())
            .spawn(move || {
                for command in rx {
                    if matches!(command, Command::Shutdown) {
                        break;
                    }
                    let mut backend = worker_backend.lock().unwrap_or_else(|e| e.into_inner());
                    dispatch(&mut **backend, command);
                }
            })
            .expect("failed to spawn mediacore-render thread");

        let owner = handle.thread().id();

        Self {
            backend,
            commands: tx,
            handle: Some(handle),
            owner,
            cached_name: Mutex::new(None),
        }
    }

    /// True when the caller is already running on the render thread.
    fn on_render_thread(&self) -> bool {
        thread::current().id() == self.owner
    }

    fn call(&self, build: impl FnOnce(Sender<MediaResult<()>>) -> Command) -> MediaResult<()> {
        if self.on_render_thread() {
            let (reply_tx, reply_rx) = bounded(1);
            let mut backend = self.backend.lock().unwrap_or_else(|e| e.into_inner());
            dispatch(&mut **backend, build(reply_tx));
            drop(backend);
            return reply_rx.recv().map_err(|_| VideoRenderError::ThreadGone)?;
        }

        let (reply_tx, reply_rx) = bounded(1);
        self.commands
            .send(build(reply_tx))
            .map_err(|_| VideoRenderError::ThreadGone)?;
        reply_rx.recv().map_err(|_| VideoRenderError::ThreadGone)?
    }
}

impl Renderer for RendererProxy {
    fn init(&mut self, window_handle: usize, width: u32, height: u32) -> MediaResult<()> {
        self.call(|reply| Command::Init { window_handle, width, height, reply })
    }

    fn render_frame(&mut self, frame: &VideoFrame) -> MediaResult<()> {
        let frame = frame.clone();
        self.call(|reply| Command::RenderFrame { frame, reply })
    }

    fn present(&mut self) -> MediaResult<()> {
        self.call(|reply| Command::Present { reply })
    }

    fn clear_caches(&mut self) -> MediaResult<()> {
        self.call(|reply| Command::ClearCaches { reply })
    }

    fn on_resize(&mut self, width: u32, height: u32) -> MediaResult<()> {
        self.call(|reply| Command::OnResize { width, height, reply })
    }

    fn renderer_name(&self) -> String {
        if self.on_render_thread() {
            let backend = self.backend.lock().unwrap_or_else(|e| e.into_inner());
            return backend.renderer_name();
        }

        let mut cache = self.cached_name.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(name) = cache.as_ref() {
            return name.clone();
        }

        let (reply_tx, reply_rx) = bounded(1);
        let name = if self.commands.send(Command::GetName { reply: reply_tx }).is_ok() {
            reply_rx.recv().unwrap_or_default()
        } else {
            warn!("mediacore-render thread gone; renderer_name falling back to empty string");
            String::new()
        };
        *cache = Some(name.clone());
        name
    }
}

impl Drop for RendererProxy {
    fn drop(&mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("mediacore-render thread panicked during shutdown");
            }
        }
    }
}
