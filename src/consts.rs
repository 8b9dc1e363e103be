pub const WEBHOOK_SUBSCRIBE_MODE: &str = "subscribe";
pub const LONG_LIVED_GRANT_TYPE: &str = "ig_exchange_token";

// Public sample media used by the attachment send operations
pub const SAMPLE_IMAGE_URL: &str =
    "https://file-examples.com/storage/fea570b16e6703ef79e65b4/2017/10/file_example_PNG_500kB.png";
pub const SAMPLE_AUDIO_URL: &str =
    "https://file-examples.com/storage/fea570b16e6703ef79e65b4/2017/11/file_example_MP3_700KB.mp3";
pub const SAMPLE_VIDEO_URL: &str = "https://www.w3schools.com/html/mov_bbb.mp4";
