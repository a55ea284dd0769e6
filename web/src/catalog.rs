//! Static lobby tables. Room and tab descriptors are fixed at compile time;
//! the UI renders them and never mutates them.

/// What a room is for. Drives the icon and which screen a room card opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomKind {
    Tombala,
    Cards,
    Tiles,
    Board,
}

/// A lobby room with fixed identity, kind and label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomDescriptor {
    pub id: u32,
    pub kind: RoomKind,
    pub label: &'static str,
    pub capacity: u32,
}

pub const ROOM_CATALOG: &[RoomDescriptor] = &[
    RoomDescriptor {
        id: 1,
        kind: RoomKind::Tombala,
        label: "Tombala Salonu 1",
        capacity: 8,
    },
    RoomDescriptor {
        id: 2,
        kind: RoomKind::Tombala,
        label: "Tombala Salonu 2",
        capacity: 8,
    },
    RoomDescriptor {
        id: 3,
        kind: RoomKind::Cards,
        label: "Batak Odası",
        capacity: 4,
    },
    RoomDescriptor {
        id: 4,
        kind: RoomKind::Cards,
        label: "Pişti Odası",
        capacity: 4,
    },
    RoomDescriptor {
        id: 5,
        kind: RoomKind::Tiles,
        label: "Okey Masası",
        capacity: 4,
    },
    RoomDescriptor {
        id: 6,
        kind: RoomKind::Board,
        label: "Tavla Köşesi",
        capacity: 2,
    },
];

/// A tab in the game-center screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

pub const TAB_CATALOG: &[TabDescriptor] = &[
    TabDescriptor {
        id: "salonlar",
        label: "Salonlar",
    },
    TabDescriptor {
        id: "oyunlar",
        label: "Oyunlar",
    },
];

pub const DEFAULT_TAB: &str = "salonlar";

pub fn room_by_id(id: u32) -> Option<&'static RoomDescriptor> {
    ROOM_CATALOG.iter().find(|room| room.id == id)
}

pub fn rooms_of_kind(kind: RoomKind) -> impl Iterator<Item = &'static RoomDescriptor> {
    ROOM_CATALOG.iter().filter(move |room| room.kind == kind)
}

pub fn tab_by_id(id: &str) -> Option<&'static TabDescriptor> {
    let trimmed = id.trim();
    TAB_CATALOG
        .iter()
        .find(|tab| tab.id.eq_ignore_ascii_case(trimmed))
}
