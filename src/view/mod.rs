pub mod multiconnect_view;
