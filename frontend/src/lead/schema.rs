use thiserror::Error;

use crate::lead::record::LeadRecord;

/// Every field a lead form can carry, declared in message order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeadField {
    Name,
    Phone,
    Mobile,
    Email,
    City,
    Investment,
    Budget,
    Sector,
    Role,
    Message,
}

impl LeadField {
    /// The `name` attribute of the matching form input.
    pub fn input_name(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Phone => "phone",
            LeadField::Mobile => "mobile",
            LeadField::Email => "email",
            LeadField::City => "city",
            LeadField::Investment => "investment",
            LeadField::Budget => "budget",
            LeadField::Sector => "sector",
            LeadField::Role => "type",
            LeadField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeadField::Name => "👤 *Name:*",
            LeadField::Phone | LeadField::Mobile => "📱 *Mobile:*",
            LeadField::Email => "📧 *Email:*",
            LeadField::City => "🏙️ *City:*",
            LeadField::Investment | LeadField::Budget => "💰 *Budget:*",
            LeadField::Sector => "🏭 *Sector:*",
            LeadField::Role => "👥 *Role:*",
            LeadField::Message => "💬 *Message:*",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    /// Full contact form at the bottom of the page.
    Contact,
    /// Quick enquiry form in the hero section.
    Hero,
}

impl FormVariant {
    pub fn required(self) -> &'static [LeadField] {
        match self {
            FormVariant::Contact => &[LeadField::Name, LeadField::Phone, LeadField::Email],
            FormVariant::Hero => &[LeadField::Name, LeadField::Mobile],
        }
    }

    pub fn optional(self) -> &'static [LeadField] {
        match self {
            FormVariant::Contact => &[
                LeadField::City,
                LeadField::Investment,
                LeadField::Sector,
                LeadField::Role,
                LeadField::Message,
            ],
            FormVariant::Hero => &[LeadField::Budget, LeadField::Sector],
        }
    }

    /// Required and optional fields merged in message order.
    pub fn fields(self) -> Vec<LeadField> {
        let mut fields: Vec<LeadField> = self
            .required()
            .iter()
            .chain(self.optional())
            .copied()
            .collect();
        fields.sort();
        fields
    }

    pub fn is_required(self, field: LeadField) -> bool {
        self.required().contains(&field)
    }

    pub fn title(self) -> &'static str {
        match self {
            FormVariant::Contact => "🏪 *New Franchise Enquiry – MakeMyFranchise*",
            FormVariant::Hero => "🏪 *Quick Franchise Enquiry – MakeMyFranchise*",
        }
    }

    pub fn missing_message(self) -> &'static str {
        match self {
            FormVariant::Contact => "Please fill in your name, email and phone number.",
            FormVariant::Hero => "Please enter your name and mobile number.",
        }
    }

    pub fn idle_label(self) -> &'static str {
        match self {
            FormVariant::Contact => "Send Enquiry",
            FormVariant::Hero => "Get Free Consultation",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            FormVariant::Contact => "Sending…",
            FormVariant::Hero => "Opening WhatsApp…",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormVariant::Contact => {
                "Thank you! Your enquiry has been sent. Our team will contact you shortly."
            }
            FormVariant::Hero => "WhatsApp opened! Your enquiry is pre-filled — just tap Send.",
        }
    }

    /// Checks presence of every required field. No format validation.
    pub fn validate(self, record: &LeadRecord) -> Result<(), LeadError> {
        let missing: Vec<LeadField> = self
            .required()
            .iter()
            .copied()
            .filter(|field| !record.is_present(*field))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(LeadError::MissingRequired { variant: self, missing })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("{}", .variant.missing_message())]
    MissingRequired {
        variant: FormVariant,
        missing: Vec<LeadField>,
    },
}

impl LeadError {
    pub fn missing_fields(&self) -> &[LeadField] {
        match self {
            LeadError::MissingRequired { missing, .. } => missing,
        }
    }
}
