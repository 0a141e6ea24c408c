pub mod album;
pub mod lyric;
pub mod track;
pub mod video;
