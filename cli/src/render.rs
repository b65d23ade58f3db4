use std::fmt::Write;

use delver_core::{Dungeon, RoomType};

const LEGEND: [RoomType; 9] = [
    RoomType::Start,
    RoomType::PlainRoom,
    RoomType::EnemyRoom,
    RoomType::DifficultEnemyRoom,
    RoomType::Shop,
    RoomType::Smithy,
    RoomType::TreasureRoom,
    RoomType::Shrine,
    RoomType::BossRoom,
];

pub(crate) const fn glyph(room: RoomType) -> char {
    use RoomType::*;
    match room {
        Empty => ' ',
        // only visible if classification left something behind
        Corridor => '#',
        Start => '@',
        PlainRoom => '.',
        EnemyRoom => 'e',
        DifficultEnemyRoom => 'E',
        Shop => '$',
        Smithy => 's',
        TreasureRoom => 'T',
        Shrine => '+',
        BossRoom => 'B',
    }
}

pub(crate) fn text(dungeon: &Dungeon) -> String {
    let expansion = dungeon.expansion();
    let (height, width) = dungeon.size();
    let mut out = String::new();

    writeln!(
        out,
        "seed {}: {}/{} cells ({:?})",
        dungeon.seed(),
        expansion.placed,
        expansion.requested,
        expansion.stop
    )
    .unwrap();

    for row in 0..height {
        let line: String = (0..width)
            .map(|col| glyph(dungeon.room_at((row, col)).unwrap_or_default()))
            .collect();
        writeln!(out, "{}", line.trim_end()).unwrap();
    }

    for room in LEGEND {
        let count = dungeon.count(room);
        if count > 0 {
            writeln!(out, "{} {:?}: {}", glyph(room), room, count).unwrap();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use delver_core::*;

    #[test]
    fn renders_one_line_per_row_plus_header() {
        let dungeon = SeededDungeonGenerator::new(8)
            .generate(LayoutConfig::new((7, 9), 12), &RoomSettings::default())
            .unwrap();

        let out = text(&dungeon);
        let lines: Vec<_> = out.lines().collect();

        assert!(lines[0].starts_with("seed 8: "));
        assert_eq!(lines[1], "");
        assert_eq!(lines[7], "");
        assert!(lines[4].contains('@'));
        assert!(out.contains("@ Start: 1"));
        assert!(!out.contains('#'));
    }

    #[test]
    fn glyphs_are_distinct() {
        let mut seen: Vec<char> = LEGEND.iter().map(|&room| glyph(room)).collect();
        seen.push(glyph(RoomType::Empty));
        seen.push(glyph(RoomType::Corridor));
        seen.sort_unstable();
        seen.dedup();

        assert_eq!(seen.len(), LEGEND.len() + 2);
    }
}
