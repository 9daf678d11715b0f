//! The authenticated user's own view

use super::MapperBase;
use crate::domain::Me;
use crate::enrich::EnrichmentContext;
use crate::error::HalResult;
use crate::hal::{HalAppender, Representation, RepresentationAppender};
use crate::permission::{checks, SharedSubject};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeDto {
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl From<&Me> for MeDto {
    fn from(me: &Me) -> Self {
        Self {
            name: me.user.name.clone(),
            display_name: me.user.display_name.clone(),
            mail: me.user.mail.clone(),
            groups: me.groups.clone(),
        }
    }
}

#[derive(Clone)]
pub struct MeMapper {
    base: MapperBase,
}

impl MeMapper {
    pub fn new(base: MapperBase) -> Self {
        Self { base }
    }

    pub fn map(&self, me: &Me, subject: &SharedSubject) -> HalResult<Representation> {
        let links = self.base.links();
        let name = me.user.name.as_str();
        let permitted = |action: &str| subject.is_permitted(&checks::user(action, name));

        let mut repr = Representation::from_dto(&MeDto::from(me))?;
        let mut appender = RepresentationAppender::new(&mut repr);
        let me_links = links.me()?;
        let user_links = links.user()?;
        appender.append_link("self", &me_links.self_link())?;
        if permitted("delete") {
            appender.append_link("delete", &user_links.delete(name))?;
        }
        if permitted("modify") {
            appender.append_link("update", &user_links.update(name))?;
        }
        if !me.user.external && permitted("changePassword") {
            appender.append_link("password", &me_links.password_change())?;
        }
        if !me.user.external && permitted("changeApiKeys") {
            appender.append_link("apiKeys", &me_links.api_keys())?;
        }

        let facts = EnrichmentContext::new().with(&me.user).with(subject);
        self.base.apply_enrichers(me, facts, &mut repr)?;
        Ok(repr)
    }
}
