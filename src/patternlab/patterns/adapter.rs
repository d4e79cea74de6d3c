//! Adapter pattern: two player backends with differently-named,
//! format-specific methods, unified behind one `play(tag, file)` interface.
//! Format tags dispatch case-insensitively; nothing is actually decoded.

use crate::error::Result;
use crate::sink::Sink;

use super::{completed, section_header};

/// Target interface shared by every adapter.
pub trait MediaPlayer {
    fn play(&self, format_tag: &str, filename: &str, sink: &mut dyn Sink) -> Result<()>;
}

/// Adaptee: the modern backend.
#[derive(Default)]
pub struct AdvancedMediaPlayer;

impl AdvancedMediaPlayer {
    pub fn play_vlc(&self, filename: &str, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!("Playing VLC file: {}", filename))
    }

    pub fn play_mp4(&self, filename: &str, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!("Playing MP4 file: {}", filename))
    }
}

/// Adaptee: the legacy backend.
#[derive(Default)]
pub struct LegacyAudioPlayer;

impl LegacyAudioPlayer {
    pub fn play_mp3(&self, filename: &str, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!("Playing MP3 file: {}", filename))
    }

    pub fn play_wav(&self, filename: &str, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!("Playing WAV file: {}", filename))
    }
}

#[derive(Default)]
pub struct AdvancedMediaAdapter {
    advanced_player: AdvancedMediaPlayer,
}

impl MediaPlayer for AdvancedMediaAdapter {
    fn play(&self, format_tag: &str, filename: &str, sink: &mut dyn Sink) -> Result<()> {
        match format_tag.to_ascii_lowercase().as_str() {
            "vlc" => self.advanced_player.play_vlc(filename, sink),
            "mp4" => self.advanced_player.play_mp4(filename, sink),
            _ => sink.write_line(&format!("Unsupported format: {}", format_tag)),
        }
    }
}

#[derive(Default)]
pub struct LegacyAudioAdapter {
    legacy_player: LegacyAudioPlayer,
}

impl MediaPlayer for LegacyAudioAdapter {
    fn play(&self, format_tag: &str, filename: &str, sink: &mut dyn Sink) -> Result<()> {
        match format_tag.to_ascii_lowercase().as_str() {
            "mp3" => self.legacy_player.play_mp3(filename, sink),
            "wav" => self.legacy_player.play_wav(filename, sink),
            _ => sink.write_line(&format!("Unsupported format: {}", format_tag)),
        }
    }
}

/// Routes a format tag to whichever adapter family claims it. Formats outside
/// both families are a normal message path, not an error.
#[derive(Default)]
pub struct UniversalMediaPlayer {
    advanced_adapter: AdvancedMediaAdapter,
    legacy_adapter: LegacyAudioAdapter,
}

impl UniversalMediaPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MediaPlayer for UniversalMediaPlayer {
    fn play(&self, format_tag: &str, filename: &str, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!(
            "Attempting to play {} as {}",
            filename, format_tag
        ))?;

        match format_tag.to_ascii_lowercase().as_str() {
            "mp3" | "wav" => self.legacy_adapter.play(format_tag, filename, sink),
            "vlc" | "mp4" => self.advanced_adapter.play(format_tag, filename, sink),
            _ => sink.write_line(&format!(
                "Format {} not supported by any player",
                format_tag
            )),
        }
    }
}

pub fn run<S: Sink>(sink: &mut S) -> Result<()> {
    section_header(sink, "Adapter Pattern: Media Players")?;
    sink.blank_line()?;

    let player = UniversalMediaPlayer::new();

    let playlist = [
        ("mp3", "song.mp3"),
        ("mp4", "movie.mp4"),
        ("vlc", "presentation.vlc"),
        ("wav", "sound.wav"),
        ("avi", "video.avi"),
    ];

    for (format_tag, filename) in playlist {
        sink.write_line(&format!("Format: {}", format_tag.to_uppercase()))?;
        player.play(format_tag, filename, sink)?;
    }

    sink.blank_line()?;
    completed(sink, "Adapter")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::memory::MemorySink;

    #[test]
    fn mp3_dispatches_to_the_legacy_backend() {
        let mut sink = MemorySink::new();
        let player = UniversalMediaPlayer::new();

        player.play("mp3", "song.mp3", &mut sink).unwrap();

        assert!(sink.contains("Playing MP3 file: song.mp3"));
    }

    #[test]
    fn vlc_dispatches_to_the_advanced_backend() {
        let mut sink = MemorySink::new();
        let player = UniversalMediaPlayer::new();

        player.play("vlc", "talk.vlc", &mut sink).unwrap();

        assert!(sink.contains("Playing VLC file: talk.vlc"));
    }

    #[test]
    fn tags_are_case_insensitive() {
        let mut sink = MemorySink::new();
        let player = UniversalMediaPlayer::new();

        player.play("MP4", "movie.mp4", &mut sink).unwrap();
        player.play("Wav", "sound.wav", &mut sink).unwrap();

        assert!(sink.contains("Playing MP4 file: movie.mp4"));
        assert!(sink.contains("Playing WAV file: sound.wav"));
    }

    #[test]
    fn avi_is_not_supported_by_any_player() {
        let mut sink = MemorySink::new();
        let player = UniversalMediaPlayer::new();

        player.play("avi", "video.avi", &mut sink).unwrap();

        assert!(sink.contains("Format avi not supported by any player"));
    }

    #[test]
    fn family_adapter_reports_unsupported_formats() {
        let mut sink = MemorySink::new();
        let legacy = LegacyAudioAdapter::default();

        legacy.play("mp4", "movie.mp4", &mut sink).unwrap();

        assert_eq!(sink.lines(), &["Unsupported format: mp4"]);
    }

    #[test]
    fn demo_transcript_covers_the_playlist() {
        let mut sink = MemorySink::new();
        run(&mut sink).unwrap();

        assert!(sink.contains("Attempting to play song.mp3 as mp3"));
        assert!(sink.contains("Format avi not supported by any player"));
        assert!(sink.contains("Adapter pattern demonstration completed successfully!"));
    }
}
