use std::rc::Rc;

use crate::{CredentialProvider, PageBackend, PageDispatch, PageNavigator, UiReset};

/// Every port the page option menu needs, bundled for context injection.
#[derive(Clone)]
pub struct Services {
    backend: Rc<dyn PageBackend>,
    credentials: Rc<dyn CredentialProvider>,
    navigator: Rc<dyn PageNavigator>,
    reset: Rc<dyn UiReset>,
    dispatch: Rc<dyn PageDispatch>,
}

impl Services {
    pub fn backend(&self) -> &Rc<dyn PageBackend> {
        &self.backend
    }

    pub fn credentials(&self) -> &Rc<dyn CredentialProvider> {
        &self.credentials
    }

    pub fn navigator(&self) -> &Rc<dyn PageNavigator> {
        &self.navigator
    }

    pub fn reset(&self) -> &Rc<dyn UiReset> {
        &self.reset
    }

    pub fn dispatch(&self) -> &Rc<dyn PageDispatch> {
        &self.dispatch
    }

    pub fn access_token(&self) -> Option<String> {
        self.credentials.access_token()
    }
}

/// Identity comparison, so the bundle can travel through component props.
impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
            && Rc::ptr_eq(&self.credentials, &other.credentials)
            && Rc::ptr_eq(&self.navigator, &other.navigator)
            && Rc::ptr_eq(&self.reset, &other.reset)
            && Rc::ptr_eq(&self.dispatch, &other.dispatch)
    }
}

#[derive(Default)]
pub struct ServicesBuilder {
    backend: Option<Rc<dyn PageBackend>>,
    credentials: Option<Rc<dyn CredentialProvider>>,
    navigator: Option<Rc<dyn PageNavigator>>,
    reset: Option<Rc<dyn UiReset>>,
    dispatch: Option<Rc<dyn PageDispatch>>,
}

impl ServicesBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn backend(mut self, backend: impl PageBackend + 'static) -> Self {
        self.backend = Some(Rc::new(backend));
        self
    }

    pub fn credentials(mut self, credentials: impl CredentialProvider + 'static) -> Self {
        self.credentials = Some(Rc::new(credentials));
        self
    }

    pub fn navigator(mut self, navigator: impl PageNavigator + 'static) -> Self {
        self.navigator = Some(Rc::new(navigator));
        self
    }

    pub fn reset(mut self, reset: impl UiReset + 'static) -> Self {
        self.reset = Some(Rc::new(reset));
        self
    }

    pub fn dispatch(mut self, dispatch: impl PageDispatch + 'static) -> Self {
        self.dispatch = Some(Rc::new(dispatch));
        self
    }

    pub fn build(self) -> Result<Services, &'static str> {
        Ok(Services {
            backend: self.backend.ok_or("page backend required")?,
            credentials: self.credentials.ok_or("credential provider required")?,
            navigator: self.navigator.ok_or("navigator required")?,
            reset: self.reset.ok_or("ui reset hook required")?,
            dispatch: self.dispatch.ok_or("page dispatch required")?,
        })
    }
}
