pub mod booking_sweep;
