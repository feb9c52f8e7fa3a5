//! The sequencer: transition table and async driver
//!
//! The transition table lives in [`transition`], a function free of I/O
//! and timers so every rule of the bring-up protocol can be exercised in
//! plain synchronous tests. [`OltSequencer`] is the thin async driver
//! around it: it executes the outbound actions a transition produces,
//! feeds entry events synchronously after each state change, and races
//! the wait timer against the link while in a waiting state.

use pas_codec::{
    AlarmConfig, GeneralParamId, OltCommand, OltOpticsConfig, OltResponse, OpticsIoControl,
    PasCodec, PonToggle, ResponseKind,
};
use pas_core::{CHANNELS, CHANNEL_COUNT, ChannelId, PasError, PasResult};
use pas_transport::OltLink;

use crate::context::SessionContext;
use crate::event::Event;
use crate::state::OltState;

/// One outbound action produced by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Encode and transmit one command, tagged with a channel for the
    /// per-channel provisioning fan-outs
    Send {
        command: OltCommand,
        channel: Option<ChannelId>,
    },
}

/// Result of one transition: the actions to execute before the next wait
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    pub actions: Vec<Action>,
}

impl Step {
    fn none() -> Self {
        Self::default()
    }

    fn send_one(command: OltCommand) -> Self {
        Self {
            actions: vec![Action::Send {
                command,
                channel: None,
            }],
        }
    }

    /// One command per channel, in increasing channel-id order
    fn fan_out(build: impl Fn(ChannelId) -> OltCommand) -> Self {
        Self {
            actions: CHANNELS
                .iter()
                .map(|&channel| Action::Send {
                    command: build(channel),
                    channel: Some(channel),
                })
                .collect(),
        }
    }
}

/// Park the context in the terminal failure state and surface the cause
fn fail(ctx: &mut SessionContext, error: PasError) -> PasResult<Step> {
    ctx.set_state(OltState::Error);
    Err(error)
}

/// Mark one per-channel acknowledgment and advance past the barrier once
/// every channel has answered
fn mark_channel(ctx: &mut SessionContext, response: &OltResponse, next: OltState) -> PasResult<Step> {
    let Some(channel) = response.channel else {
        return fail(
            ctx,
            PasError::InvalidData(format!("{} ack without a channel tag", response.kind)),
        );
    };
    if let Err(error) = ctx.tracker_mut().mark(channel) {
        return fail(ctx, error);
    }
    if ctx.tracker().is_complete() {
        ctx.tracker_mut().reset();
        ctx.set_state(next);
    }
    Ok(Step::none())
}

/// Apply one event to the session, returning the outbound actions
///
/// The function mutates the context (state, retry budget, tracker) and
/// performs no I/O. A returned error is a terminal failure: the context
/// has already been parked in [`OltState::Error`] and the session must be
/// discarded.
pub fn transition(ctx: &mut SessionContext, event: Event) -> PasResult<Step> {
    let state = ctx.state();
    match (state, event) {
        // Entry actions. Each fires once, synchronously, on entering the
        // state, and hands over to the next waiting state.
        (OltState::Disconnected, Event::Entered) => {
            ctx.set_state(OltState::WaitProtoVersion);
            Ok(Step::send_one(OltCommand::GetProtocolVersion))
        }
        (OltState::GotProtoVersion, Event::Entered) => {
            ctx.set_state(OltState::WaitOltVersion);
            Ok(Step::send_one(OltCommand::GetOltVersion))
        }
        (OltState::GotOltVersion, Event::Entered) => {
            ctx.tracker_mut().begin(CHANNEL_COUNT);
            ctx.set_state(OltState::WaitOltOptics);
            let optics = OltOpticsConfig::default();
            Ok(Step::fan_out(move |_| OltCommand::SetOltOptics(optics)))
        }
        (OltState::GotOltOptics, Event::Entered) => {
            ctx.tracker_mut().begin(CHANNEL_COUNT);
            ctx.set_state(OltState::WaitOltIoOptics);
            Ok(Step::fan_out(|channel| {
                OltCommand::SetOpticsIoControl(OpticsIoControl::for_channel(channel))
            }))
        }
        (OltState::GotOltIoOptics, Event::Entered) => {
            ctx.tracker_mut().begin(CHANNEL_COUNT);
            ctx.set_state(OltState::WaitQueryResponse);
            Ok(Step::fan_out(|_| {
                OltCommand::GetGeneralParam(GeneralParamId::TxEnableDefault)
            }))
        }
        // Add-channel requests go out only after every channel confirmed
        // transmit-enable, not while the query is still in flight.
        (OltState::GotQueryResponse, Event::Entered) => {
            ctx.tracker_mut().begin(CHANNEL_COUNT);
            ctx.set_state(OltState::WaitOltAdd);
            Ok(Step::fan_out(|_| OltCommand::AddOltChannel))
        }
        (OltState::GotOltAdd, Event::Entered) => {
            ctx.tracker_mut().begin(CHANNEL_COUNT);
            ctx.set_state(OltState::WaitAlarmSet);
            Ok(Step::fan_out(|_| {
                OltCommand::SetAlarmConfig(AlarmConfig::los_enabled())
            }))
        }

        // Handshake waits: timeouts are retryable while the shared budget
        // lasts, anything unexpected on the wire is immediately fatal.
        (s, Event::TimerFired) if s.is_handshake_wait() => {
            log::info!("timed out waiting for {}", s.phase_name());
            let remaining = ctx.consume_retry();
            if remaining < 0 {
                log::debug!("too many retries, aborting");
                fail(ctx, PasError::RetriesExhausted)
            } else {
                log::debug!("restarting handshake, {remaining} retries left");
                ctx.tracker_mut().reset();
                ctx.set_state(OltState::Disconnected);
                Ok(Step::none())
            }
        }
        (OltState::WaitProtoVersion, Event::Response(r)) => {
            if r.kind == ResponseKind::ProtocolVersion {
                ctx.set_state(OltState::GotProtoVersion);
                Ok(Step::none())
            } else {
                log::error!("got garbage response {} during handshake", r.kind);
                fail(ctx, PasError::UnexpectedResponse(r.kind.to_string()))
            }
        }
        (OltState::WaitOltVersion, Event::Response(r)) => {
            if r.kind == ResponseKind::OltVersion {
                ctx.set_state(OltState::GotOltVersion);
                Ok(Step::none())
            } else {
                log::error!("got garbage response {} during handshake", r.kind);
                fail(ctx, PasError::UnexpectedResponse(r.kind.to_string()))
            }
        }
        (s, Event::DecodeFailed) if s.is_handshake_wait() => {
            log::error!("got undecodable frame during handshake");
            fail(
                ctx,
                PasError::UnexpectedResponse("undecodable frame".to_string()),
            )
        }

        // Provisioning waits: a timeout is fatal with no retry, because
        // duplicate configuration commands could leave the hardware in an
        // ambiguous partial state.
        (s, Event::TimerFired) if s.is_provisioning_wait() => {
            log::error!("{} went unanswered, disconnecting", s.phase_name());
            fail(ctx, PasError::PhaseTimeout(s.phase_name()))
        }
        (OltState::WaitOltOptics, Event::Response(r))
            if r.kind == ResponseKind::SetOltOpticsAck =>
        {
            mark_channel(ctx, &r, OltState::GotOltOptics)
        }
        (OltState::WaitOltIoOptics, Event::Response(r))
            if r.kind == ResponseKind::SetOpticsIoControlAck =>
        {
            mark_channel(ctx, &r, OltState::GotOltIoOptics)
        }
        (OltState::WaitQueryResponse, Event::Response(r))
            if r.kind == ResponseKind::GeneralParam =>
        {
            // A disabled channel dooms the bring-up even if other
            // channels have not answered yet.
            if r.value == PonToggle::Enable as i32 {
                mark_channel(ctx, &r, OltState::GotQueryResponse)
            } else {
                log::error!("TX downstream is not enabled");
                let channel = r.channel.unwrap_or_default();
                fail(ctx, PasError::TransmitDisabled(channel))
            }
        }
        (OltState::WaitOltAdd, Event::Response(r))
            if r.kind == ResponseKind::AddOltChannelAck =>
        {
            mark_channel(ctx, &r, OltState::GotOltAdd)
        }
        (OltState::WaitAlarmSet, Event::Response(r))
            if r.kind == ResponseKind::SetAlarmConfigAck =>
        {
            mark_channel(ctx, &r, OltState::GotAlarmSet)
        }
        // Late or unrelated frames during a provisioning wait are
        // tolerated by non-match: no state change, timer keeps running.
        (s, Event::Response(r)) if s.is_provisioning_wait() => {
            log::debug!("ignoring {} while waiting for {}", r.kind, s.phase_name());
            Ok(Step::none())
        }
        (s, Event::DecodeFailed) if s.is_provisioning_wait() => {
            log::debug!("ignoring undecodable frame while waiting for {}", s.phase_name());
            Ok(Step::none())
        }

        // Operational steady state: recurring keepalive, inbound traffic
        // causes no transition.
        (OltState::GotAlarmSet, Event::TimerFired) => {
            Ok(Step::send_one(OltCommand::GetOltVersion))
        }
        (OltState::GotAlarmSet, Event::Response(_) | Event::DecodeFailed) => Ok(Step::none()),

        (s, e) => Err(PasError::InvalidData(format!(
            "no transition from {s} on {e:?}"
        ))),
    }
}

/// Async driver of one bring-up session
///
/// Owns the link, the codec and the session context. One sequencer per
/// device; run it to completion on one task, there is no internal
/// parallelism.
pub struct OltSequencer<L: OltLink, C: PasCodec> {
    link: L,
    codec: C,
    ctx: SessionContext,
}

impl<L: OltLink, C: PasCodec> OltSequencer<L, C> {
    /// Create a sequencer from its parts
    ///
    /// Prefer [`crate::builder::SequencerBuilder`], which validates the
    /// configuration.
    pub fn new(ctx: SessionContext, link: L, codec: C) -> Self {
        Self { link, codec, ctx }
    }

    /// The session context
    #[must_use]
    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    /// Active state
    #[must_use]
    pub fn state(&self) -> OltState {
        self.ctx.state()
    }

    /// Informational diagnostics, gated by the configured debug level
    fn diag(&self, level: u8, message: &str) {
        if self.ctx.debug_level() >= level {
            log::info!("{message}");
        }
    }

    async fn execute(&mut self, step: Step) -> PasResult<()> {
        for action in step.actions {
            let Action::Send { command, channel } = action;
            self.diag(2, &format!("sending {command} on channel {channel:?}"));
            let payload = self.codec.encode(&command)?;
            self.link.send(payload, channel).await?;
        }
        Ok(())
    }

    /// Apply one event, then drain the entry actions of whatever state
    /// the transition landed in
    async fn dispatch(&mut self, event: Event) -> PasResult<()> {
        let step = transition(&mut self.ctx, event)?;
        self.execute(step).await?;
        while self.ctx.state().has_entry_action() {
            let step = transition(&mut self.ctx, Event::Entered)?;
            self.execute(step).await?;
        }
        Ok(())
    }

    /// Run one wait cycle: race the state's timer against the next
    /// filter-passing frame, then apply the winner
    async fn wait_once(&mut self) -> PasResult<()> {
        let timeout = self.ctx.state().wait_timeout().ok_or_else(|| {
            PasError::InvalidData(format!("{} is not a waiting state", self.ctx.state()))
        })?;
        let event = tokio::select! {
            _ = tokio::time::sleep(timeout) => Event::TimerFired,
            received = self.link.recv() => match received {
                Ok(frame) => match self.codec.decode(&frame) {
                    Ok(response) => {
                        if self.ctx.verbose() {
                            log::debug!("received {} from {}", response.kind, frame.src);
                        }
                        Event::Response(response)
                    }
                    Err(error) => {
                        log::debug!("undecodable frame from {}: {error}", frame.src);
                        Event::DecodeFailed
                    }
                },
                Err(error) => return Err(error),
            },
        };
        self.dispatch(event).await
    }

    /// Drive the session until it reaches the operational steady state
    ///
    /// Returns once the alarm-configured state is reached; the keepalive
    /// loop has not started yet. A terminal failure surfaces as the error
    /// that caused it, with the context parked in [`OltState::Error`].
    pub async fn run_until_operational(&mut self) -> PasResult<()> {
        while !self.ctx.state().is_operational() {
            if self.ctx.state().is_terminal() {
                return Err(PasError::InvalidData(
                    "session is terminal, construct a new one".to_string(),
                ));
            }
            if self.ctx.state().has_entry_action() {
                self.dispatch(Event::Entered).await?;
            } else {
                self.wait_once().await?;
            }
        }
        self.diag(1, "olt is operational");
        Ok(())
    }

    /// Drive the full session: bring-up followed by the indefinite
    /// keepalive loop
    ///
    /// Never returns `Ok` under normal operation; it resolves only with
    /// the error that terminated the session.
    pub async fn run(&mut self) -> PasResult<()> {
        self.run_until_operational().await?;
        loop {
            self.wait_once().await?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DEFAULT_IFACE;
    use pas_transport::MacAddress;

    fn context() -> SessionContext {
        SessionContext::new(MacAddress::new([1; 6]), DEFAULT_IFACE.to_string())
    }

    fn response(kind: ResponseKind, channel: Option<ChannelId>, value: i32) -> Event {
        Event::Response(OltResponse {
            kind,
            channel,
            value,
        })
    }

    fn ack(kind: ResponseKind, channel: ChannelId) -> Event {
        response(kind, Some(channel), 0)
    }

    /// Drive a fresh context through the version handshake
    fn handshake(ctx: &mut SessionContext) {
        transition(ctx, Event::Entered).unwrap();
        transition(ctx, response(ResponseKind::ProtocolVersion, None, 0)).unwrap();
        transition(ctx, Event::Entered).unwrap();
        transition(ctx, response(ResponseKind::OltVersion, None, 0)).unwrap();
        assert_eq!(ctx.state(), OltState::GotOltVersion);
    }

    /// Complete one provisioning barrier with acks in the given order
    fn complete_phase(ctx: &mut SessionContext, kind: ResponseKind, order: [ChannelId; 4]) {
        let wait = ctx.state();
        for (i, channel) in order.iter().enumerate() {
            assert_eq!(ctx.state(), wait, "left {wait} after {i} acks");
            transition(ctx, ack(kind, *channel)).unwrap();
        }
    }

    #[test]
    fn test_disconnected_sends_proto_request() {
        let mut ctx = context();
        let step = transition(&mut ctx, Event::Entered).unwrap();
        assert_eq!(ctx.state(), OltState::WaitProtoVersion);
        assert_eq!(
            step.actions,
            vec![Action::Send {
                command: OltCommand::GetProtocolVersion,
                channel: None,
            }]
        );
    }

    #[test]
    fn test_handshake_timeout_restarts_until_budget_exhausted() {
        let mut ctx = context();
        transition(&mut ctx, Event::Entered).unwrap();

        for expected_budget in [2, 1, 0] {
            transition(&mut ctx, Event::TimerFired).unwrap();
            assert_eq!(ctx.state(), OltState::Disconnected);
            assert_eq!(ctx.retry_budget(), expected_budget);
            transition(&mut ctx, Event::Entered).unwrap();
        }

        let result = transition(&mut ctx, Event::TimerFired);
        assert!(matches!(result, Err(PasError::RetriesExhausted)));
        assert_eq!(ctx.state(), OltState::Error);
        assert_eq!(ctx.retry_budget(), -1);
    }

    #[test]
    fn test_budget_is_shared_across_both_handshake_waits() {
        let mut ctx = context();
        transition(&mut ctx, Event::Entered).unwrap();
        transition(&mut ctx, Event::TimerFired).unwrap(); // budget 2
        transition(&mut ctx, Event::Entered).unwrap();
        transition(&mut ctx, response(ResponseKind::ProtocolVersion, None, 0)).unwrap();
        transition(&mut ctx, Event::Entered).unwrap();
        assert_eq!(ctx.state(), OltState::WaitOltVersion);

        transition(&mut ctx, Event::TimerFired).unwrap();
        assert_eq!(ctx.retry_budget(), 1);
        assert_eq!(ctx.state(), OltState::Disconnected);
    }

    #[test]
    fn test_garbage_during_handshake_is_fatal() {
        let mut ctx = context();
        transition(&mut ctx, Event::Entered).unwrap();
        let result = transition(&mut ctx, ack(ResponseKind::AddOltChannelAck, 0));
        assert!(matches!(result, Err(PasError::UnexpectedResponse(_))));
        assert_eq!(ctx.state(), OltState::Error);
    }

    #[test]
    fn test_decode_failure_during_handshake_is_fatal() {
        let mut ctx = context();
        transition(&mut ctx, Event::Entered).unwrap();
        let result = transition(&mut ctx, Event::DecodeFailed);
        assert!(matches!(result, Err(PasError::UnexpectedResponse(_))));
        assert_eq!(ctx.state(), OltState::Error);
    }

    #[test]
    fn test_optics_fan_out_covers_all_channels_in_order() {
        let mut ctx = context();
        handshake(&mut ctx);
        let step = transition(&mut ctx, Event::Entered).unwrap();
        assert_eq!(ctx.state(), OltState::WaitOltOptics);
        assert_eq!(step.actions.len(), 4);
        for (i, action) in step.actions.iter().enumerate() {
            let Action::Send { command, channel } = action;
            assert_eq!(*channel, Some(i as ChannelId));
            assert!(matches!(command, OltCommand::SetOltOptics(_)));
        }
        assert!(ctx.tracker().is_active());
    }

    #[test]
    fn test_io_control_uses_per_channel_pins() {
        let mut ctx = context();
        handshake(&mut ctx);
        transition(&mut ctx, Event::Entered).unwrap();
        complete_phase(&mut ctx, ResponseKind::SetOltOpticsAck, [0, 1, 2, 3]);
        assert_eq!(ctx.state(), OltState::GotOltOptics);

        let step = transition(&mut ctx, Event::Entered).unwrap();
        assert_eq!(ctx.state(), OltState::WaitOltIoOptics);
        let Action::Send { command, channel } = &step.actions[2];
        assert_eq!(*channel, Some(2));
        assert_eq!(
            *command,
            OltCommand::SetOpticsIoControl(OpticsIoControl::new(11, 10, 8, 16))
        );
    }

    #[test]
    fn test_optics_acks_complete_in_any_order() {
        for order in [[3u8, 1, 0, 2], [2, 3, 1, 0], [1, 0, 3, 2], [0, 1, 2, 3]] {
            let mut ctx = context();
            handshake(&mut ctx);
            transition(&mut ctx, Event::Entered).unwrap();
            complete_phase(&mut ctx, ResponseKind::SetOltOpticsAck, order);
            assert_eq!(ctx.state(), OltState::GotOltOptics);
        }
    }

    #[test]
    fn test_duplicate_acks_do_not_complete_the_barrier() {
        let mut ctx = context();
        handshake(&mut ctx);
        transition(&mut ctx, Event::Entered).unwrap();
        for _ in 0..4 {
            transition(&mut ctx, ack(ResponseKind::SetOltOpticsAck, 1)).unwrap();
        }
        assert_eq!(ctx.state(), OltState::WaitOltOptics);
    }

    #[test]
    fn test_provisioning_timeout_is_fatal() {
        let mut ctx = context();
        handshake(&mut ctx);
        transition(&mut ctx, Event::Entered).unwrap();
        let result = transition(&mut ctx, Event::TimerFired);
        assert!(matches!(result, Err(PasError::PhaseTimeout(_))));
        assert_eq!(ctx.state(), OltState::Error);
    }

    #[test]
    fn test_unmatched_response_during_provisioning_is_ignored() {
        let mut ctx = context();
        handshake(&mut ctx);
        transition(&mut ctx, Event::Entered).unwrap();
        let step = transition(&mut ctx, ack(ResponseKind::SetAlarmConfigAck, 0)).unwrap();
        assert_eq!(step, Step::none());
        assert_eq!(ctx.state(), OltState::WaitOltOptics);

        let step = transition(&mut ctx, Event::DecodeFailed).unwrap();
        assert_eq!(step, Step::none());
        assert_eq!(ctx.state(), OltState::WaitOltOptics);
    }

    #[test]
    fn test_out_of_range_channel_is_fatal() {
        let mut ctx = context();
        handshake(&mut ctx);
        transition(&mut ctx, Event::Entered).unwrap();
        let result = transition(&mut ctx, ack(ResponseKind::SetOltOpticsAck, 7));
        assert!(matches!(result, Err(PasError::InvalidChannel(7))));
        assert_eq!(ctx.state(), OltState::Error);
    }

    #[test]
    fn test_missing_channel_tag_on_ack_is_fatal() {
        let mut ctx = context();
        handshake(&mut ctx);
        transition(&mut ctx, Event::Entered).unwrap();
        let result = transition(&mut ctx, response(ResponseKind::SetOltOpticsAck, None, 0));
        assert!(matches!(result, Err(PasError::InvalidData(_))));
        assert_eq!(ctx.state(), OltState::Error);
    }

    /// Drive a context to the transmit-enable query wait
    fn to_query_wait(ctx: &mut SessionContext) {
        handshake(ctx);
        transition(ctx, Event::Entered).unwrap();
        complete_phase(ctx, ResponseKind::SetOltOpticsAck, [0, 1, 2, 3]);
        transition(ctx, Event::Entered).unwrap();
        complete_phase(ctx, ResponseKind::SetOpticsIoControlAck, [0, 1, 2, 3]);
        let step = transition(ctx, Event::Entered).unwrap();
        assert_eq!(ctx.state(), OltState::WaitQueryResponse);
        assert_eq!(step.actions.len(), 4);
    }

    #[test]
    fn test_transmit_disabled_is_fatal_regardless_of_other_channels() {
        let mut ctx = context();
        to_query_wait(&mut ctx);

        // channels 0, 1, 3 still silent when channel 2 reports disabled
        let result = transition(
            &mut ctx,
            response(ResponseKind::GeneralParam, Some(2), PonToggle::Disable as i32),
        );
        assert!(matches!(result, Err(PasError::TransmitDisabled(2))));
        assert_eq!(ctx.state(), OltState::Error);
    }

    #[test]
    fn test_add_channel_waits_for_query_completion() {
        let mut ctx = context();
        to_query_wait(&mut ctx);

        let enabled = PonToggle::Enable as i32;
        for channel in [1u8, 3, 0] {
            let step = transition(
                &mut ctx,
                response(ResponseKind::GeneralParam, Some(channel), enabled),
            )
            .unwrap();
            // no add-channel command may leave before the barrier opens
            assert_eq!(step, Step::none());
            assert_eq!(ctx.state(), OltState::WaitQueryResponse);
        }
        transition(
            &mut ctx,
            response(ResponseKind::GeneralParam, Some(2), enabled),
        )
        .unwrap();
        assert_eq!(ctx.state(), OltState::GotQueryResponse);

        let step = transition(&mut ctx, Event::Entered).unwrap();
        assert_eq!(ctx.state(), OltState::WaitOltAdd);
        assert_eq!(step.actions.len(), 4);
        assert!(step.actions.iter().all(|action| {
            let Action::Send { command, .. } = action;
            *command == OltCommand::AddOltChannel
        }));
    }

    #[test]
    fn test_full_bring_up_reaches_operational_state() {
        let mut ctx = context();
        to_query_wait(&mut ctx);
        let enabled = PonToggle::Enable as i32;
        for channel in 0..4 {
            transition(
                &mut ctx,
                response(ResponseKind::GeneralParam, Some(channel), enabled),
            )
            .unwrap();
        }
        transition(&mut ctx, Event::Entered).unwrap();
        complete_phase(&mut ctx, ResponseKind::AddOltChannelAck, [2, 0, 3, 1]);
        transition(&mut ctx, Event::Entered).unwrap();
        assert_eq!(ctx.state(), OltState::WaitAlarmSet);
        complete_phase(&mut ctx, ResponseKind::SetAlarmConfigAck, [0, 1, 2, 3]);

        assert_eq!(ctx.state(), OltState::GotAlarmSet);
        assert!(ctx.state().is_operational());
        assert!(!ctx.tracker().is_active());
    }

    #[test]
    fn test_keepalive_self_loop() {
        let mut ctx = context();
        to_query_wait(&mut ctx);
        let enabled = PonToggle::Enable as i32;
        for channel in 0..4 {
            transition(
                &mut ctx,
                response(ResponseKind::GeneralParam, Some(channel), enabled),
            )
            .unwrap();
        }
        transition(&mut ctx, Event::Entered).unwrap();
        complete_phase(&mut ctx, ResponseKind::AddOltChannelAck, [0, 1, 2, 3]);
        transition(&mut ctx, Event::Entered).unwrap();
        complete_phase(&mut ctx, ResponseKind::SetAlarmConfigAck, [0, 1, 2, 3]);
        assert_eq!(ctx.state(), OltState::GotAlarmSet);

        for _ in 0..3 {
            let step = transition(&mut ctx, Event::TimerFired).unwrap();
            assert_eq!(
                step.actions,
                vec![Action::Send {
                    command: OltCommand::GetOltVersion,
                    channel: None,
                }]
            );
            assert_eq!(ctx.state(), OltState::GotAlarmSet);
        }

        // inbound traffic while operational causes no transition
        let step = transition(&mut ctx, response(ResponseKind::OltVersion, None, 0)).unwrap();
        assert_eq!(step, Step::none());
        assert_eq!(ctx.state(), OltState::GotAlarmSet);
    }
}
