use std::sync::{Condvar, Mutex};

// 食事する哲学者のモニタ
// 状態はすべて 1 つの Mutex の中に持ち、待ち合わせは条件変数で行う

// 哲学者の状態
// 文字列で持つとタイポがそのままバグになるので、列挙型で閉じておく
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhilosopherState {
    Thinking,
    Hungry,
    Eating,
    Talking,
}

// 箸の状態
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChopstickState {
    Available,
    Occupied,
}

// モニタ内部の共有状態
// i 番目の哲学者が使う箸は i 番 (左) と (i + 1) % n 番 (右) で、
// それぞれの箸はちょうど 2 人の隣り合う哲学者に共有される
struct Table {
    philosophers: Vec<PhilosopherState>,
    chopsticks: Vec<ChopstickState>,
    talking: bool,       // 誰かが発言中か
    talk_waiters: usize, // 発言権を待っている人数
}

impl Table {
    // i 番目の哲学者が食事を始められるなら始めさせる
    // 箸の確保は 2 本同時に行う。1 本だけ持って残りを待つ状態を作らないので、
    // 確保の循環待ちは構造的に起きない
    fn try_serve(&mut self, i: usize) {
        let n = self.philosophers.len();
        let left = i;
        let right = (i + 1) % n;

        if self.philosophers[i] == PhilosopherState::Hungry
            && self.chopsticks[left] == ChopstickState::Available
            && self.chopsticks[right] == ChopstickState::Available
        {
            self.chopsticks[left] = ChopstickState::Occupied;
            self.chopsticks[right] = ChopstickState::Occupied;
            self.philosophers[i] = PhilosopherState::Eating;
        }
    }
}

pub struct DiningMonitor {
    n: usize,
    table: Mutex<Table>,
    can_eat: Condvar,  // put_down で箸が返されたときに全員へ broadcast
    can_talk: Condvar, // end_talk で発言権が空いたときに 1 人だけ起こす
}

impl DiningMonitor {
    pub fn new(n: usize) -> Self {
        assert!(n >= 2);

        DiningMonitor {
            n,
            table: Mutex::new(Table {
                philosophers: vec![PhilosopherState::Thinking; n],
                chopsticks: vec![ChopstickState::Available; n],
                talking: false,
                talk_waiters: 0,
            }),
            can_eat: Condvar::new(),
            can_talk: Condvar::new(),
        }
    }

    // 哲学者の番号 (1 始まり) を配列の添字に変換する
    // 範囲外の番号で配列を壊す前にここで落とす
    fn index(&self, id: usize) -> usize {
        assert!(1 <= id && id <= self.n);
        id - 1
    }

    // 両隣の箸が 2 本とも取れるまで待ち、食事状態になってから戻る
    pub fn pick_up(&self, id: usize) {
        let i = self.index(id);
        let mut table = self.table.lock().unwrap();

        assert_eq!(table.philosophers[i], PhilosopherState::Thinking);
        table.philosophers[i] = PhilosopherState::Hungry;
        table.try_serve(i);

        // notify_all で起こされても自分の番とは限らないし、spurious wakeup もある
        // 起きるたびに条件を検査し直す
        while table.philosophers[i] != PhilosopherState::Eating {
            table = self.can_eat.wait(table).unwrap();
            table.try_serve(i);
        }
    }

    // 箸を 2 本とも返し、両隣が食べられるようになったか検査してから waiter を起こす
    pub fn put_down(&self, id: usize) {
        let i = self.index(id);
        let mut table = self.table.lock().unwrap();

        // 食事中でないのに put_down が呼ばれたら呼び出し側のバグ
        assert_eq!(table.philosophers[i], PhilosopherState::Eating);

        table.philosophers[i] = PhilosopherState::Thinking;
        table.chopsticks[i] = ChopstickState::Available;
        table.chopsticks[(i + 1) % self.n] = ChopstickState::Available;

        // この put_down で食べられるようになる可能性があるのは両隣だけ
        table.try_serve((i + self.n - 1) % self.n);
        table.try_serve((i + 1) % self.n);

        self.can_eat.notify_all();
    }

    // 発言権を取る。取れたら true
    // 食事中の哲学者は発言状態に移さず false を返す (今回の発言は見送り)
    pub fn request_talk(&self, id: usize) -> bool {
        let i = self.index(id);
        let mut table = self.table.lock().unwrap();

        while table.talking {
            // end_talk と起床の間に割り込んだ別の哲学者が発言権を取ることがあるため、
            // 待ち人数の増減は待つ側が wait をまたぐたびに行う
            table.talk_waiters += 1;
            table = self.can_talk.wait(table).unwrap();
            table.talk_waiters -= 1;
        }

        if table.philosophers[i] == PhilosopherState::Eating {
            return false;
        }

        table.philosophers[i] = PhilosopherState::Talking;
        table.talking = true;
        true
    }

    // 発言権を返し、待っている哲学者がいれば 1 人だけ起こす
    pub fn end_talk(&self, id: usize) {
        let i = self.index(id);
        let mut table = self.table.lock().unwrap();

        assert_eq!(table.philosophers[i], PhilosopherState::Talking);

        table.philosophers[i] = PhilosopherState::Thinking;
        table.talking = false;

        if table.talk_waiters > 0 {
            self.can_talk.notify_one();
        }
    }

    // 現在の状態をロック越しに読む (表示とテスト用)
    pub fn state_of(&self, id: usize) -> PhilosopherState {
        let i = self.index(id);
        let table = self.table.lock().unwrap();
        table.philosophers[i]
    }
}
