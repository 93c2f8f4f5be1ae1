// Dweve MaxHeap - Instrumented Binary Max-Heap
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Console summary for a single run.

use crate::runner::RunRecord;

/// Formats the multi-line summary printed after a run.
pub fn format_record(record: &RunRecord) -> String {
    format!(
        "Algorithm: {}\n\
         Input: {}, n={}\n\
         Time (ns): {}\n\
         Comparisons: {}\n\
         Swaps: {}\n\
         Array accesses: {}\n\
         Memory allocations: {}",
        record.algorithm,
        record.input_type,
        record.n,
        record.time_ns,
        record.comparisons,
        record.swaps,
        record.array_accesses,
        record.memory_allocations,
    )
}

/// Prints [`format_record`] to stdout.
pub fn print_record(record: &RunRecord) {
    println!("{}", format_record(record));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::InputKind;

    #[test]
    fn test_format_record() {
        let record = RunRecord {
            algorithm: "MaxHeap".to_string(),
            input_type: InputKind::NearlySorted,
            n: 1000,
            time_ns: 42,
            comparisons: 3,
            swaps: 2,
            array_accesses: 17,
            memory_allocations: 1,
        };
        let text = format_record(&record);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Algorithm: MaxHeap");
        assert_eq!(lines[1], "Input: nearly-sorted, n=1000");
        assert_eq!(lines[2], "Time (ns): 42");
        assert_eq!(lines[3], "Comparisons: 3");
        assert_eq!(lines[4], "Swaps: 2");
        assert_eq!(lines[5], "Array accesses: 17");
        assert_eq!(lines[6], "Memory allocations: 1");
    }
}
