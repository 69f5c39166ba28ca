// SPDX-License-Identifier: MPL-2.0
//! Playback session: one controller wired to one render engine.
//!
//! A session owns everything a playback screen needs for its lifetime: the
//! controller, the engine driver task, the notification channel coming back
//! from the engine and the command journal. There is no process-wide
//! instance; whoever launches a session passes it where it is needed and
//! disposes of it with [`PlaybackSession::shutdown`].
//!
//! Notifications are reconciled on the task that owns the session, either
//! in bulk with [`PlaybackSession::sync`] or one at a time with
//! [`PlaybackSession::next_notification`]. The controller state is never
//! touched from the engine task.

use super::catalog::FilterCatalog;
use super::command::PlaybackCommand;
use super::controller::PlaybackController;
use super::engine::{spawn_engine, RenderEngine};
use super::sender::command_channel;
use crate::config::Config;
use crate::diagnostics::CommandJournal;
use crate::error::{Error, Result};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

pub struct PlaybackSession<E: RenderEngine> {
    controller: PlaybackController,
    notify_tx: mpsc::UnboundedSender<PlaybackCommand>,
    notify_rx: mpsc::UnboundedReceiver<PlaybackCommand>,
    journal: CommandJournal,
    engine_task: JoinHandle<E>,
}

impl<E: RenderEngine> PlaybackSession<E> {
    /// Starts `engine` on the current runtime and connects a controller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] when called outside a tokio runtime.
    pub fn launch(config: &Config, catalog: Arc<FilterCatalog>, engine: E) -> Result<Self> {
        let (sender, command_rx) = command_channel();
        let (notify_tx, notify_rx) = mpsc::unbounded_channel();
        let journal = CommandJournal::new(config.diagnostics.capacity());

        let mut controller =
            PlaybackController::new(&config.player, &config.controller, catalog, sender)?;
        controller.set_journal(journal.handle());

        let engine_task = spawn_engine(engine, command_rx, notify_tx.clone());
        debug!(source = %config.player.source, "playback session launched");

        Ok(Self {
            controller,
            notify_tx,
            notify_rx,
            journal,
            engine_task,
        })
    }

    #[must_use]
    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlaybackController {
        &mut self.controller
    }

    /// Sender for transitions the engine makes on its own (end of media,
    /// external interruption). They are reconciled like any other
    /// notification.
    #[must_use]
    pub fn notifier(&self) -> mpsc::UnboundedSender<PlaybackCommand> {
        self.notify_tx.clone()
    }

    /// Applies every notification received so far. Returns how many.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(notification) = self.notify_rx.try_recv() {
            self.controller.on_engine_state_changed(&notification);
            applied += 1;
        }
        self.journal.process_pending();
        applied
    }

    /// Waits for the next notification and applies it.
    ///
    /// The session keeps a notifier of its own, so this only returns `None`
    /// if the channel was closed from outside, which cannot happen today.
    pub async fn next_notification(&mut self) -> Option<PlaybackCommand> {
        let notification = self.notify_rx.recv().await?;
        self.controller.on_engine_state_changed(&notification);
        self.journal.process_pending();
        Some(notification)
    }

    /// Journal of everything sent and received, up to date.
    pub fn journal(&mut self) -> &CommandJournal {
        self.journal.process_pending();
        &self.journal
    }

    /// Stops the session and hands back the engine in its final state.
    ///
    /// Pending deferred pauses are cancelled. Commands already sent are
    /// applied before the engine stops.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] if the engine task panicked or was
    /// cancelled.
    pub async fn shutdown(self) -> Result<E> {
        let Self {
            controller,
            engine_task,
            ..
        } = self;
        drop(controller);

        let engine = engine_task
            .await
            .map_err(|err| Error::Runtime(format!("render engine task failed: {err}")))?;
        debug!("playback session shut down");
        Ok(engine)
    }
}

impl<E: RenderEngine> std::fmt::Debug for PlaybackSession<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("controller", &self.controller)
            .field("journal_len", &self.journal.len())
            .field("engine_running", &!self.engine_task.is_finished())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Direction;
    use crate::player::engine::Composition;
    use std::time::Duration;

    fn launch() -> PlaybackSession<Composition> {
        let config = Config::default();
        PlaybackSession::launch(
            &config,
            Arc::new(FilterCatalog::standard()),
            Composition::new(&config.player),
        )
        .expect("inside a runtime")
    }

    #[test]
    fn launch_outside_runtime_fails() {
        let result = PlaybackSession::launch(
            &Config::default(),
            Arc::new(FilterCatalog::standard()),
            Composition::default(),
        );
        assert!(matches!(result, Err(Error::Runtime(_))));
    }

    #[tokio::test]
    async fn pause_round_trips_through_engine() {
        let mut session = launch();

        session.controller_mut().request_pause();
        assert_eq!(session.next_notification().await, Some(PlaybackCommand::Pause));
        assert!(!session.controller().state().is_playing);

        let engine = session.shutdown().await.unwrap();
        assert!(!engine.is_playing());
    }

    #[tokio::test]
    async fn notifier_reports_spontaneous_transition() {
        let mut session = launch();

        session.notifier().send(PlaybackCommand::Pause).unwrap();
        assert_eq!(session.sync(), 1);
        assert!(!session.controller().state().is_playing);
        assert_eq!(
            session.journal().commands(Direction::Inbound),
            vec![PlaybackCommand::Pause]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn journal_records_all_directions() {
        let mut session = launch();

        session.controller_mut().request_seek_to_end();
        assert_eq!(session.next_notification().await, Some(PlaybackCommand::Pause));

        let journal = session.journal();
        assert_eq!(journal.commands(Direction::Outbound), vec![PlaybackCommand::End]);
        assert_eq!(journal.commands(Direction::Deferred), vec![PlaybackCommand::Pause]);
        assert_eq!(journal.commands(Direction::Inbound), vec![PlaybackCommand::Pause]);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_pending_pause() {
        let mut session = launch();
        session.controller_mut().request_seek(1.0);

        let engine = session.shutdown().await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(engine.is_playing());
        assert_eq!(engine.position_secs(), 1.0);
    }
}
