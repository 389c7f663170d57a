//! Domain & parameter models for region operations
//!
//! Defines the region domain model, the create/update parameter models with their
//! validation, and conversions from the entity and into DTOs.

use crate::{
    model::region::{CreateRegionDto, RegionDto, UpdateRegionDto},
    server::{error::validation::ValidationErrors, util::validate},
};

/// The region domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub noc: String,
    pub region: String,
    pub notes: Option<String>,
}

impl Region {
    /// Converts an entity model to the region domain model
    pub fn from_entity(entity: entity::region::Model) -> Self {
        Self {
            noc: entity.noc,
            region: entity.region,
            notes: entity.notes,
        }
    }

    pub fn into_dto(self) -> RegionDto {
        RegionDto {
            noc: self.noc,
            region: self.region,
            notes: self.notes,
        }
    }
}

/// Parameters for creating a new region
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRegionParam {
    pub noc: String,
    pub region: String,
    pub notes: Option<String>,
}

impl CreateRegionParam {
    /// Validates a create payload and converts it to parameters
    ///
    /// # Arguments
    /// - `dto` - The request payload
    ///
    /// # Returns
    /// - `Ok(CreateRegionParam)` - Validated parameters
    /// - `Err(ValidationErrors)` - One or more fields are invalid
    pub fn from_dto(dto: CreateRegionDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate::noc(&mut errors, "NOC", &dto.noc);
        validate::not_blank(&mut errors, "region", &dto.region);

        errors.into_result(Self {
            noc: dto.noc,
            region: dto.region.trim().to_string(),
            notes: dto.notes,
        })
    }
}

/// Parameters for a partial region update
///
/// `None` leaves a field unchanged; `notes: Some(None)` clears the notes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRegionParam {
    pub region: Option<String>,
    pub notes: Option<Option<String>>,
}

impl UpdateRegionParam {
    /// Validates a patch payload for the region identified by `noc`
    ///
    /// The region code is the primary key and cannot be changed; a payload `NOC` is
    /// only accepted when it matches the code in the path.
    ///
    /// # Arguments
    /// - `noc` - Code of the region being patched
    /// - `dto` - The request payload
    ///
    /// # Returns
    /// - `Ok(UpdateRegionParam)` - Validated parameters
    /// - `Err(ValidationErrors)` - A changed or null `NOC`, or a null or blank `region`
    pub fn from_dto(noc: &str, dto: UpdateRegionDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(new_noc) = validate::not_null(&mut errors, "NOC", dto.noc) {
            if new_noc != noc {
                errors.add("NOC", "The region code cannot be changed.");
            }
        }
        let region = validate::not_null(&mut errors, "region", dto.region);
        if let Some(region) = region.as_deref() {
            validate::not_blank(&mut errors, "region", region);
        }

        errors.into_result(Self {
            region: region.map(|r| r.trim().to_string()),
            notes: dto.notes,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.region.is_none() && self.notes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    #[test]
    fn converts_entity_to_dto() {
        let dto = Region::from_entity(fixture::region::entity()).into_dto();

        assert_eq!(dto.noc, fixture::region::DEFAULT_NOC);
        assert_eq!(dto.region, fixture::region::DEFAULT_REGION);
        assert_eq!(dto.notes, None);
    }

    #[test]
    fn rejects_lowercase_code_and_blank_name() {
        let errors = CreateRegionParam::from_dto(CreateRegionDto {
            noc: "ita".to_string(),
            region: "  ".to_string(),
            notes: None,
        })
        .unwrap_err();

        assert_eq!(errors.fields(), vec!["NOC", "region"]);
    }

    #[test]
    fn rejects_changed_code_on_update() {
        let dto = UpdateRegionDto {
            noc: Some(Some("GBR".to_string())),
            ..Default::default()
        };

        let errors = UpdateRegionParam::from_dto("ITA", dto).unwrap_err();
        assert_eq!(errors.fields(), vec!["NOC"]);
    }

    #[test]
    fn accepts_unchanged_code_on_update() {
        let dto = UpdateRegionDto {
            noc: Some(Some("ITA".to_string())),
            notes: Some(None),
            ..Default::default()
        };

        let param = UpdateRegionParam::from_dto("ITA", dto).unwrap();
        assert_eq!(param.region, None);
        assert_eq!(param.notes, Some(None));
    }

    #[test]
    fn rejects_null_name_on_update() {
        let dto = UpdateRegionDto {
            region: Some(None),
            ..Default::default()
        };

        let errors = UpdateRegionParam::from_dto("ITA", dto).unwrap_err();
        assert_eq!(errors.fields(), vec!["region"]);
    }
}
