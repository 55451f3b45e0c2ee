mod appointment;
mod opening_hour;
