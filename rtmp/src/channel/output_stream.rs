use super::Channel;
use crate::connection::RtmpConnection;

/// The channels a single outbound media stream is sent over
pub struct OutputStream<C: RtmpConnection + ?Sized> {
    data: Channel<C>,
    video: Channel<C>,
    audio: Channel<C>,
}

impl<C: RtmpConnection + ?Sized> OutputStream<C> {
    pub fn new(data: Channel<C>, video: Channel<C>, audio: Channel<C>) -> OutputStream<C> {
        OutputStream { data, video, audio }
    }

    /// Channel for commands, status notifications and metadata
    pub fn get_data(&self) -> &Channel<C> {
        &self.data
    }

    pub fn get_video(&self) -> &Channel<C> {
        &self.video
    }

    pub fn get_audio(&self) -> &Channel<C> {
        &self.audio
    }

    pub fn close(&self) {
        self.data.close();
        self.video.close();
        self.audio.close();
    }
}
