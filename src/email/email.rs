/// An email as accepted by the GreatMail send endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Email {
    pub message: String,
    pub subject: String,
    pub from: String,
    pub to: Vec<String>,
}

impl Email {
    pub fn new(
        message: impl Into<String>,
        subject: impl Into<String>,
        from: impl Into<String>,
        to: Vec<String>,
    ) -> Self {
        Self {
            message: message.into(),
            subject: subject.into(),
            from: from.into(),
            to,
        }
    }

    /// The request body sent to GreatMail. Fields follow declaration order
    /// and recipients keep the order they were given in.
    pub fn to_json(&self) -> Vec<u8> {
        // Only string fields and a string sequence, none of which can fail.
        serde_json::to_vec(self).expect("Failed to serialize the email.")
    }
}
