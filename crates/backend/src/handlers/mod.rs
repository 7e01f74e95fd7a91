pub mod a002_chat_thread;
