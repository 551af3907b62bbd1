use pagedeck::CredentialProvider;

/// localStorage key holding the raw `Authorization` header value.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Reads the access token from browser localStorage.
pub struct LocalStorageCredentials;

impl CredentialProvider for LocalStorageCredentials {
    fn access_token(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = web_sys::window()?.local_storage().ok().flatten() {
            return storage.get_item(ACCESS_TOKEN_KEY).ok().flatten();
        }
        None
    }
}
