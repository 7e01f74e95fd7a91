pub mod a001_artifact;
pub mod a002_chat_thread;
