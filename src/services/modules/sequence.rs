//! 课程级条目顺序与前后导航
//!
//! 课程内所有模块条目拼成一条全序序列，排序键为
//! (模块 position, 模块 id, 条目 position, 条目 id)。position 相同时由
//! id 兜底，保证任何数据下都是确定性的全序。每次请求重新物化整条
//! 序列，编辑之后的导航不会出现过期位置。

use crate::models::modules::entities::SequencedModuleItem;

/// 物化排序：按 (模块 position, 模块 id, 条目 position, 条目 id)
pub fn sort_sequence(items: &mut [SequencedModuleItem]) {
    items.sort_by_key(|s| (s.module_position, s.item.module_id, s.item.position, s.item.id));
}

/// 在已排序的序列中定位条目，返回前驱与后继
///
/// 条目不在序列中（例如刚被并发删除）时返回 (None, None) 而不是报错。
pub fn sequence_neighbors(
    items: &[SequencedModuleItem],
    item_id: i64,
) -> (Option<&SequencedModuleItem>, Option<&SequencedModuleItem>) {
    let Some(index) = items.iter().position(|s| s.item.id == item_id) else {
        return (None, None);
    };

    let prev = if index > 0 { items.get(index - 1) } else { None };
    let next = items.get(index + 1);
    (prev, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::modules::entities::{ContentKind, ModuleItem};

    fn item(id: i64, module_id: i64, module_position: i32, position: i32) -> SequencedModuleItem {
        SequencedModuleItem {
            module_position,
            item: ModuleItem {
                id,
                module_id,
                position,
                indent: 0,
                content_type: ContentKind::Page,
                content_id: id * 10,
                completion_requirement: None,
            },
        }
    }

    #[test]
    fn test_neighbors_across_modules() {
        // 模块1(pos=1) 条目 A(pos=1) B(pos=2)，模块2(pos=2) 条目 C(pos=1)
        let mut items = vec![
            item(3, 2, 2, 1), // C
            item(1, 1, 1, 1), // A
            item(2, 1, 1, 2), // B
        ];
        sort_sequence(&mut items);

        let ids: Vec<i64> = items.iter().map(|s| s.item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let (prev, next) = sequence_neighbors(&items, 2);
        assert_eq!(prev.map(|s| s.item.id), Some(1));
        assert_eq!(next.map(|s| s.item.id), Some(3));

        let (prev, next) = sequence_neighbors(&items, 1);
        assert!(prev.is_none());
        assert_eq!(next.map(|s| s.item.id), Some(2));

        let (prev, next) = sequence_neighbors(&items, 3);
        assert_eq!(prev.map(|s| s.item.id), Some(2));
        assert!(next.is_none());
    }

    #[test]
    fn test_missing_item_yields_no_neighbors() {
        let mut items = vec![item(1, 1, 1, 1), item(2, 1, 1, 2)];
        sort_sequence(&mut items);

        let (prev, next) = sequence_neighbors(&items, 999);
        assert!(prev.is_none());
        assert!(next.is_none());
    }

    #[test]
    fn test_position_collisions_break_ties_by_id() {
        // 两个模块同 position，模块内条目也同 position
        let mut items = vec![
            item(7, 5, 1, 0),
            item(4, 3, 1, 0),
            item(6, 3, 1, 0),
            item(5, 3, 1, 0),
        ];
        sort_sequence(&mut items);

        // 模块 id 3 < 5，模块内 position 相同则按条目 id
        let ids: Vec<i64> = items.iter().map(|s| s.item.id).collect();
        assert_eq!(ids, vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_prev_of_next_is_identity_for_interior_items() {
        let mut items = vec![
            item(1, 1, 1, 1),
            item(2, 1, 1, 2),
            item(3, 2, 2, 1),
            item(4, 2, 2, 2),
            item(5, 3, 3, 1),
        ];
        sort_sequence(&mut items);

        for window in items.windows(2) {
            let current = window[0].item.id;
            let (_, next) = sequence_neighbors(&items, current);
            let next_id = next.expect("interior item has a successor").item.id;
            let (prev_of_next, _) = sequence_neighbors(&items, next_id);
            assert_eq!(prev_of_next.map(|s| s.item.id), Some(current));
        }
    }

    #[test]
    fn test_empty_sequence() {
        let items: Vec<SequencedModuleItem> = vec![];
        let (prev, next) = sequence_neighbors(&items, 1);
        assert!(prev.is_none());
        assert!(next.is_none());
    }
}
