// environment_provider.rs — Environment variable abstraction
//
// Config reads the MIE override through this trait so tests can hand it a
// fixed environment instead of the process one.

use std::collections::HashMap;





pub trait EnvironmentProvider {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  get_env_var
    //
    //  Returns the value of the named environment variable, if set.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn get_env_var(&self, name: &str) -> Option<String>;
}





/// The real process environment.
pub struct DefaultEnvironmentProvider;

impl EnvironmentProvider for DefaultEnvironmentProvider {
    fn get_env_var(&self, name: &str) -> Option<String> {
        std::env::var (name).ok()
    }
}





/// A fixed map; unset names are None.
impl EnvironmentProvider for HashMap<String, String> {
    fn get_env_var(&self, name: &str) -> Option<String> {
        self.get (name).cloned()
    }
}





#[cfg(test)]
pub(crate) fn mock_environment(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
