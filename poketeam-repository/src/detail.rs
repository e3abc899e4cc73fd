use serde::Deserialize;

/// The subset of the pokeapi `pokemon` resource the application renders.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct NamedResource {
    pub name: String,
}

impl PokemonDetail {
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|slot| slot.kind.name.as_str()).collect()
    }
}
