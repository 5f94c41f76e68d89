pub const CATALOG_UNAVAILABLE_TITLE: &str = "Erro";
pub const CATALOG_UNAVAILABLE_MESSAGE: &str =
    "Houve um problema ao obter os dados da rede de saúde. Tente novamente mais tarde.";

pub const PERMISSION_DENIED_TITLE: &str = "Permissão de localização não concedida";
pub const PERMISSION_DENIED_MESSAGE: &str =
    "Por favor, conceda permissão de localização para obter a localização.";

/// A non-blocking notification for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn catalog_unavailable() -> Self {
        Self {
            title: CATALOG_UNAVAILABLE_TITLE.into(),
            message: CATALOG_UNAVAILABLE_MESSAGE.into(),
        }
    }

    pub fn location_permission_denied() -> Self {
        Self {
            title: PERMISSION_DENIED_TITLE.into(),
            message: PERMISSION_DENIED_MESSAGE.into(),
        }
    }
}

pub trait AlertGateway {
    fn show(&self, alert: &Alert);
}
