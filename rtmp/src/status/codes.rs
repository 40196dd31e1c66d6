//! Status codes sent to clients in `onStatus` notifications.

pub const NC_CALL_FAILED: &str = "NetConnection.Call.Failed";
pub const NC_CALL_BADVERSION: &str = "NetConnection.Call.BadVersion";
pub const NC_CONNECT_APPSHUTDOWN: &str = "NetConnection.Connect.AppShutdown";
pub const NC_CONNECT_CLOSED: &str = "NetConnection.Connect.Closed";
pub const NC_CONNECT_FAILED: &str = "NetConnection.Connect.Failed";
pub const NC_CONNECT_REJECTED: &str = "NetConnection.Connect.Rejected";
pub const NC_CONNECT_SUCCESS: &str = "NetConnection.Connect.Success";
pub const NC_CONNECT_INVALID_APPLICATION: &str = "NetConnection.Connect.InvalidApp";

pub const NS_INVALID_ARGUMENT: &str = "NetStream.InvalidArg";
pub const NS_CLEAR_SUCCESS: &str = "NetStream.Clear.Success";
pub const NS_CLEAR_FAILED: &str = "NetStream.Clear.Failed";
pub const NS_PUBLISH_START: &str = "NetStream.Publish.Start";
pub const NS_PUBLISH_BADNAME: &str = "NetStream.Publish.BadName";
pub const NS_FAILED: &str = "NetStream.Failed";
pub const NS_UNPUBLISHED_SUCCESS: &str = "NetStream.Unpublish.Success";
pub const NS_RECORD_START: &str = "NetStream.Record.Start";
pub const NS_RECORD_NOACCESS: &str = "NetStream.Record.NoAccess";
pub const NS_RECORD_STOP: &str = "NetStream.Record.Stop";
pub const NS_RECORD_FAILED: &str = "NetStream.Record.Failed";
pub const NS_PLAY_INSUFFICIENT_BW: &str = "NetStream.Play.InsufficientBW";
pub const NS_PLAY_START: &str = "NetStream.Play.Start";
pub const NS_PLAY_STREAMNOTFOUND: &str = "NetStream.Play.StreamNotFound";
pub const NS_PLAY_STOP: &str = "NetStream.Play.Stop";
pub const NS_PLAY_FAILED: &str = "NetStream.Play.Failed";
pub const NS_PLAY_RESET: &str = "NetStream.Play.Reset";
pub const NS_PLAY_PUBLISHNOTIFY: &str = "NetStream.Play.PublishNotify";
pub const NS_PLAY_UNPUBLISHNOTIFY: &str = "NetStream.Play.UnpublishNotify";
pub const NS_PLAY_SWITCH: &str = "NetStream.Play.Switch";
pub const NS_PLAY_COMPLETE: &str = "NetStream.Play.Complete";
pub const NS_PLAY_FILE_STRUCTURE_INVALID: &str = "NetStream.Play.FileStructureInvalid";
pub const NS_PLAY_NO_SUPPORTED_TRACK_FOUND: &str = "NetStream.Play.NoSupportedTrackFound";
pub const NS_SEEK_NOTIFY: &str = "NetStream.Seek.Notify";
pub const NS_SEEK_FAILED: &str = "NetStream.Seek.Failed";
pub const NS_PAUSE_NOTIFY: &str = "NetStream.Pause.Notify";
pub const NS_UNPAUSE_NOTIFY: &str = "NetStream.Unpause.Notify";
pub const NS_DATA_START: &str = "NetStream.Data.Start";

pub const APP_SCRIPT_ERROR: &str = "Application.Script.Error";
pub const APP_SCRIPT_WARNING: &str = "Application.Script.Warning";
pub const APP_RESOURCE_LOWMEMORY: &str = "Application.Resource.LowMemory";
pub const APP_SHUTDOWN: &str = "Application.Shutdown";
pub const APP_GC: &str = "Application.GC";

pub const SO_NO_READ_ACCESS: &str = "SharedObject.NoReadAccess";
pub const SO_NO_WRITE_ACCESS: &str = "SharedObject.NoWriteAccess";
pub const SO_CREATION_FAILED: &str = "SharedObject.ObjectCreationFailed";
pub const SO_PERSISTENCE_MISMATCH: &str = "SharedObject.BadPersistence";
