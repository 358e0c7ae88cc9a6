pub mod multiconnect_presenter;
