//! Drill service - Runs a lesson as an interactive drill
//!
//! This service orchestrates the complete drill cycle for each pair:
//! 1. Show the source sentence, give the learner time to translate
//! 2. Wait for a keypress (or `exit` / end of input)
//! 3. Reveal the target sentence
//! 4. Synthesize the target sentence and play it
//! 5. Rest, then move to the next pair

use std::{fmt, sync::Arc, time::Duration};

use domain::Lesson;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{ConsolePort, PlaybackPort, SpeechPort},
};

/// Prompt shown while waiting for the learner
const CONTINUE_PROMPT: &str = "Press Enter to continue...";

/// Input line that ends the lesson immediately (matched exactly)
const EXIT_COMMAND: &str = "exit";

/// Notice written when the input stream closes mid-lesson
const INPUT_CLOSED_NOTICE: &str = "Input closed. Ending the lesson.";

/// Pacing configuration for the drill cycle
#[derive(Debug, Clone)]
pub struct DrillConfig {
    /// Time the learner gets with the source sentence before the prompt
    pub source_pause: Duration,
    /// Time the revealed target sentence stands alone before the audio
    pub target_pause: Duration,
    /// Rest after a pair's audio before the next source sentence
    pub between_pause: Duration,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            source_pause: Duration::from_secs(5),
            target_pause: Duration::from_secs(1),
            between_pause: Duration::from_secs(2),
        }
    }
}

/// How a drill run ended
///
/// All three outcomes are successful terminations; `pairs_drilled` counts
/// the pairs whose full cycle (through playback) ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillOutcome {
    /// Every pair in the lesson was drilled
    Completed { pairs_drilled: usize },
    /// The learner typed the exit command at a prompt
    ExitRequested { pairs_drilled: usize },
    /// The input stream closed (end of file) at a prompt
    InputClosed { pairs_drilled: usize },
}

impl DrillOutcome {
    /// Number of pairs whose full cycle ran
    #[must_use]
    pub const fn pairs_drilled(&self) -> usize {
        match self {
            Self::Completed { pairs_drilled }
            | Self::ExitRequested { pairs_drilled }
            | Self::InputClosed { pairs_drilled } => *pairs_drilled,
        }
    }
}

/// Service that walks a learner through a lesson
pub struct DrillService {
    console: Arc<dyn ConsolePort>,
    speech: Arc<dyn SpeechPort>,
    playback: Arc<dyn PlaybackPort>,
    config: DrillConfig,
}

impl fmt::Debug for DrillService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrillService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DrillService {
    /// Create a new drill service with default pacing
    pub fn new(
        console: Arc<dyn ConsolePort>,
        speech: Arc<dyn SpeechPort>,
        playback: Arc<dyn PlaybackPort>,
    ) -> Self {
        Self::with_config(console, speech, playback, DrillConfig::default())
    }

    /// Create a drill service with custom pacing
    pub fn with_config(
        console: Arc<dyn ConsolePort>,
        speech: Arc<dyn SpeechPort>,
        playback: Arc<dyn PlaybackPort>,
        config: DrillConfig,
    ) -> Self {
        Self {
            console,
            speech,
            playback,
            config,
        }
    }

    /// Run the lesson front to back
    ///
    /// Pairs are drilled strictly in order, one at a time. Typing the exit
    /// command or closing the input stream ends the lesson cleanly; synthesis
    /// and playback errors abort it. There is no timeout on the input wait or
    /// on synthesis.
    #[instrument(skip(self, lesson), fields(
        pairs = lesson.len(),
        source = %lesson.source_language(),
        target = %lesson.target_language()
    ))]
    pub async fn run(&self, lesson: &Lesson) -> Result<DrillOutcome, ApplicationError> {
        info!("Starting drill");
        let synthesis_language = lesson.target_language().synthesis_code().to_string();
        let mut pairs_drilled = 0;

        for (index, pair) in lesson.pairs().iter().enumerate() {
            debug!(index, "Showing source sentence");
            self.console.write_line(pair.source_text()).await?;
            sleep(self.config.source_pause).await;

            let input = match self.console.read_line(CONTINUE_PROMPT).await? {
                Some(line) => line,
                None => {
                    self.console.write_line(INPUT_CLOSED_NOTICE).await?;
                    info!(pairs_drilled, "Input stream closed, ending lesson");
                    return Ok(DrillOutcome::InputClosed { pairs_drilled });
                },
            };

            if input == EXIT_COMMAND {
                info!(pairs_drilled, "Exit requested, ending lesson");
                return Ok(DrillOutcome::ExitRequested { pairs_drilled });
            }

            self.console.write_line(pair.target_text()).await?;
            sleep(self.config.target_pause).await;

            let synthesis = match self
                .speech
                .synthesize(pair.target_text().to_string(), synthesis_language.clone())
                .await
            {
                Ok(result) => result,
                Err(e) => {
                    warn!(error = %e, index, "Speech synthesis failed");
                    return Err(e);
                },
            };

            debug!(
                audio_size = synthesis.audio_data.len(),
                format = %synthesis.format,
                "Audio synthesized"
            );

            if let Err(e) = self
                .playback
                .play(synthesis.audio_data, synthesis.format)
                .await
            {
                warn!(error = %e, index, "Audio playback failed");
                return Err(e);
            }

            sleep(self.config.between_pause).await;
            pairs_drilled += 1;
        }

        info!(pairs_drilled, "Lesson complete");
        Ok(DrillOutcome::Completed { pairs_drilled })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use domain::{AudioFormat, LanguageCode, SentencePair};
    use mockall::Sequence;
    use mockall::predicate::eq;

    use super::*;
    use crate::ports::{
        MockConsolePort, MockPlaybackPort, MockSpeechPort, SynthesisResult,
    };

    fn zero_pacing() -> DrillConfig {
        DrillConfig {
            source_pause: Duration::ZERO,
            target_pause: Duration::ZERO,
            between_pause: Duration::ZERO,
        }
    }

    fn lesson(target: &str, pairs: Vec<SentencePair>) -> Lesson {
        Lesson::new(
            LanguageCode::new("de-DE").unwrap(),
            LanguageCode::new(target).unwrap(),
            pairs,
        )
    }

    fn three_pair_lesson() -> Lesson {
        lesson(
            "it-IT",
            vec![
                SentencePair::new("Guten Morgen!", "Buongiorno!"),
                SentencePair::new("Ich habe ein Buch gelesen.", "Ho letto un libro."),
                SentencePair::new("Ein Wasser, bitte.", "Un'acqua, per favore."),
            ],
        )
    }

    /// Console mock that records every written line
    fn recording_console(
        inputs: Vec<Option<String>>,
    ) -> (MockConsolePort, Arc<Mutex<Vec<String>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let mut console = MockConsolePort::new();

        let sink = Arc::clone(&written);
        console.expect_write_line().returning(move |line| {
            sink.lock().unwrap().push(line.to_string());
            Ok(())
        });

        let queue = Arc::new(Mutex::new(inputs));
        console
            .expect_read_line()
            .with(eq(CONTINUE_PROMPT))
            .returning(move |_| Ok(queue.lock().unwrap().remove(0)));

        (console, written)
    }

    fn mp3_result() -> SynthesisResult {
        SynthesisResult {
            audio_data: vec![0xFF, 0xF3, 0x01],
            format: AudioFormat::Mp3,
        }
    }

    #[tokio::test]
    async fn completes_all_pairs_in_order() {
        let (console, written) = recording_console(vec![
            Some(String::new()),
            Some(String::new()),
            Some(String::new()),
        ]);

        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .withf(|_, language| language == "it")
            .times(3)
            .returning(|_, _| Ok(mp3_result()));

        let mut playback = MockPlaybackPort::new();
        playback.expect_play().times(3).returning(|_, _| Ok(()));

        let service = DrillService::with_config(
            Arc::new(console),
            Arc::new(speech),
            Arc::new(playback),
            zero_pacing(),
        );

        let outcome = service.run(&three_pair_lesson()).await.unwrap();
        assert_eq!(outcome, DrillOutcome::Completed { pairs_drilled: 3 });

        let lines = written.lock().unwrap();
        assert_eq!(
            *lines,
            vec![
                "Guten Morgen!",
                "Buongiorno!",
                "Ich habe ein Buch gelesen.",
                "Ho letto un libro.",
                "Ein Wasser, bitte.",
                "Un'acqua, per favore.",
            ]
        );
    }

    #[tokio::test]
    async fn empty_input_then_exit_drills_exactly_one_pair() {
        // First prompt: plain Enter (continue). Second prompt: exit.
        let (console, written) =
            recording_console(vec![Some(String::new()), Some("exit".to_string())]);

        let mut speech = MockSpeechPort::new();
        speech.expect_synthesize().times(1).returning(|_, _| Ok(mp3_result()));

        let mut playback = MockPlaybackPort::new();
        playback.expect_play().times(1).returning(|_, _| Ok(()));

        let service = DrillService::with_config(
            Arc::new(console),
            Arc::new(speech),
            Arc::new(playback),
            zero_pacing(),
        );

        let outcome = service.run(&three_pair_lesson()).await.unwrap();
        assert_eq!(outcome, DrillOutcome::ExitRequested { pairs_drilled: 1 });

        // The second pair's source was shown, but never its target.
        let lines = written.lock().unwrap();
        assert_eq!(
            *lines,
            vec![
                "Guten Morgen!",
                "Buongiorno!",
                "Ich habe ein Buch gelesen.",
            ]
        );
    }

    #[tokio::test]
    async fn end_of_input_at_first_prompt_reveals_nothing() {
        let (console, written) = recording_console(vec![None]);

        // No synthesize/play expectations: any call would panic the test.
        let speech = MockSpeechPort::new();
        let playback = MockPlaybackPort::new();

        let service = DrillService::with_config(
            Arc::new(console),
            Arc::new(speech),
            Arc::new(playback),
            zero_pacing(),
        );

        let outcome = service.run(&three_pair_lesson()).await.unwrap();
        assert_eq!(outcome, DrillOutcome::InputClosed { pairs_drilled: 0 });

        let lines = written.lock().unwrap();
        assert_eq!(*lines, vec!["Guten Morgen!", INPUT_CLOSED_NOTICE]);
    }

    #[tokio::test]
    async fn exit_must_match_exactly() {
        // Padded or capitalized variants are ordinary input: the drill goes on.
        let (console, _written) = recording_console(vec![
            Some(" exit ".to_string()),
            Some("Exit".to_string()),
        ]);

        let mut speech = MockSpeechPort::new();
        speech.expect_synthesize().times(2).returning(|_, _| Ok(mp3_result()));

        let mut playback = MockPlaybackPort::new();
        playback.expect_play().times(2).returning(|_, _| Ok(()));

        let service = DrillService::with_config(
            Arc::new(console),
            Arc::new(speech),
            Arc::new(playback),
            zero_pacing(),
        );

        let two_pairs = lesson(
            "it-IT",
            vec![
                SentencePair::new("eins", "uno"),
                SentencePair::new("zwei", "due"),
            ],
        );
        let outcome = service.run(&two_pairs).await.unwrap();
        assert_eq!(outcome, DrillOutcome::Completed { pairs_drilled: 2 });
    }

    #[tokio::test]
    async fn synthesis_language_is_the_primary_subtag() {
        let (console, _written) = recording_console(vec![Some(String::new())]);

        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .withf(|text, language| text == "你好" && language == "zh")
            .times(1)
            .returning(|_, _| Ok(mp3_result()));

        let mut playback = MockPlaybackPort::new();
        playback.expect_play().times(1).returning(|_, _| Ok(()));

        let service = DrillService::with_config(
            Arc::new(console),
            Arc::new(speech),
            Arc::new(playback),
            zero_pacing(),
        );

        let one_pair = lesson("zh-CN", vec![SentencePair::new("Hallo", "你好")]);
        let outcome = service.run(&one_pair).await.unwrap();
        assert_eq!(outcome, DrillOutcome::Completed { pairs_drilled: 1 });
    }

    #[tokio::test]
    async fn synthesis_error_aborts_the_drill() {
        let (console, _written) = recording_console(vec![Some(String::new())]);

        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .times(1)
            .returning(|_, _| Err(ApplicationError::Synthesis("endpoint down".to_string())));

        // Playback must never run after a failed synthesis.
        let playback = MockPlaybackPort::new();

        let service = DrillService::with_config(
            Arc::new(console),
            Arc::new(speech),
            Arc::new(playback),
            zero_pacing(),
        );

        let err = service.run(&three_pair_lesson()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Synthesis(_)));
    }

    #[tokio::test]
    async fn playback_error_aborts_the_drill() {
        let (console, _written) = recording_console(vec![Some(String::new())]);

        let mut speech = MockSpeechPort::new();
        speech.expect_synthesize().times(1).returning(|_, _| Ok(mp3_result()));

        let mut playback = MockPlaybackPort::new();
        playback
            .expect_play()
            .times(1)
            .returning(|_, _| Err(ApplicationError::Playback("no device".to_string())));

        let service = DrillService::with_config(
            Arc::new(console),
            Arc::new(speech),
            Arc::new(playback),
            zero_pacing(),
        );

        let err = service.run(&three_pair_lesson()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Playback(_)));
    }

    #[tokio::test]
    async fn empty_lesson_completes_without_touching_the_console() {
        let console = MockConsolePort::new();
        let speech = MockSpeechPort::new();
        let playback = MockPlaybackPort::new();

        let service = DrillService::with_config(
            Arc::new(console),
            Arc::new(speech),
            Arc::new(playback),
            zero_pacing(),
        );

        let empty = lesson("it-IT", Vec::new());
        let outcome = service.run(&empty).await.unwrap();
        assert_eq!(outcome, DrillOutcome::Completed { pairs_drilled: 0 });
    }

    #[tokio::test]
    async fn prompt_follows_the_source_sentence() {
        // Sequence check: the prompt is only shown after the source line.
        let mut seq = Sequence::new();
        let mut console = MockConsolePort::new();
        console
            .expect_write_line()
            .with(eq("eins"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        console
            .expect_read_line()
            .with(eq(CONTINUE_PROMPT))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        console
            .expect_write_line()
            .with(eq(INPUT_CLOSED_NOTICE))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = DrillService::with_config(
            Arc::new(console),
            Arc::new(MockSpeechPort::new()),
            Arc::new(MockPlaybackPort::new()),
            zero_pacing(),
        );

        let one_pair = lesson("it-IT", vec![SentencePair::new("eins", "uno")]);
        let outcome = service.run(&one_pair).await.unwrap();
        assert_eq!(outcome, DrillOutcome::InputClosed { pairs_drilled: 0 });
    }

    #[test]
    fn default_pacing_matches_the_drill_rhythm() {
        let config = DrillConfig::default();
        assert_eq!(config.source_pause, Duration::from_secs(5));
        assert_eq!(config.target_pause, Duration::from_secs(1));
        assert_eq!(config.between_pause, Duration::from_secs(2));
    }

    #[test]
    fn outcome_reports_pairs_drilled() {
        assert_eq!(DrillOutcome::Completed { pairs_drilled: 4 }.pairs_drilled(), 4);
        assert_eq!(
            DrillOutcome::ExitRequested { pairs_drilled: 1 }.pairs_drilled(),
            1
        );
        assert_eq!(DrillOutcome::InputClosed { pairs_drilled: 0 }.pairs_drilled(), 0);
    }

    #[test]
    fn service_debug_hides_ports() {
        let service = DrillService::new(
            Arc::new(MockConsolePort::new()),
            Arc::new(MockSpeechPort::new()),
            Arc::new(MockPlaybackPort::new()),
        );
        let debug = format!("{service:?}");
        assert!(debug.contains("DrillService"));
        assert!(debug.contains("config"));
    }
}
