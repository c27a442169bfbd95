/// Anything that can tell which queue services exist and on which port they listen.
pub trait ServiceSource {
    fn service_names(&self) -> &[String];
    fn port(&self) -> u16;
}
