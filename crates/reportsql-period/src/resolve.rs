//! Resolution of period specs into concrete date ranges.

use chrono::{DateTime, Datelike, Duration, FixedOffset, TimeZone, Utc};

use crate::error::PeriodError;
use crate::kind::PeriodKind;
use crate::spec::PeriodSpec;

/// UTC offset of the default reporting zone (Asia/Jakarta, UTC+7), in
/// seconds.
///
/// Jakarta observes no daylight saving time, so a fixed offset is exact
/// year-round.
pub const REPORTING_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// The default reporting zone as a chrono offset.
#[must_use]
pub fn reporting_zone() -> FixedOffset {
    FixedOffset::east_opt(REPORTING_UTC_OFFSET_SECS).expect("offset is within +/- 24 hours")
}

/// A concrete, inclusive date range.
///
/// `start` is 00:00:00 on the first day and `end` is 23:59:59 on the last
/// day, both in the resolver's zone. `start <= end` holds for every kind
/// except caller-inverted [`PeriodKind::RelativeRange`] /
/// [`PeriodKind::SpecificRange`] specs, which are passed through as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    /// First instant of the range.
    pub start: DateTime<FixedOffset>,
    /// Last instant of the range.
    pub end: DateTime<FixedOffset>,
}

/// Resolves [`PeriodSpec`]s against a reference instant, in one fixed zone.
///
/// The reference instant is converted into the resolver's zone before any
/// calendar arithmetic, so "current month" and "current year" are local
/// calendar terms regardless of the caller's locale. Production callers pass
/// `Utc::now()`; tests pass fixed instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    zone: FixedOffset,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(reporting_zone())
    }
}

impl Resolver {
    /// Create a resolver computing ranges in `zone`.
    #[must_use]
    pub const fn new(zone: FixedOffset) -> Self {
        Self { zone }
    }

    /// The zone this resolver computes in.
    #[must_use]
    pub const fn zone(&self) -> FixedOffset {
        self.zone
    }

    /// Resolve `spec` against the reference instant `now`.
    ///
    /// # Errors
    ///
    /// [`PeriodError::MissingParameter`] when `spec.params` omits a field
    /// the kind requires.
    pub fn resolve(
        &self,
        spec: &PeriodSpec,
        now: DateTime<Utc>,
    ) -> Result<ResolvedRange, PeriodError> {
        let local = now.with_timezone(&self.zone);
        let year = local.year();
        let month = local.month();

        let (start, end) = match spec.kind {
            PeriodKind::CurrentMonth => {
                (self.month_start(year, month, 0), self.month_end(year, month, 0))
            }

            PeriodKind::BackMonth => {
                let months = spec.params.months.ok_or(PeriodError::MissingParameter {
                    kind: spec.kind,
                    fields: "months parameter",
                })?;
                (
                    self.month_start(year, month, -months),
                    self.month_end(year, month, -months),
                )
            }

            PeriodKind::RelativeRange => {
                let (Some(start_back), Some(end_back)) =
                    (spec.params.start_back_months, spec.params.end_back_months)
                else {
                    return Err(PeriodError::MissingParameter {
                        kind: spec.kind,
                        fields: "start_back_months and end_back_months",
                    });
                };
                (
                    self.month_start(year, month, -start_back),
                    self.month_end(year, month, -end_back),
                )
            }

            PeriodKind::Ytd => (self.month_start(year, 1, 0), self.month_end(year, month, 0)),

            PeriodKind::PreviousYear => (
                self.month_start(year - 1, 1, 0),
                self.zone
                    .with_ymd_and_hms(year - 1, 12, 31, 23, 59, 59)
                    .single()
                    .expect("end of December exists in a fixed-offset zone"),
            ),

            PeriodKind::SpecificMonth => {
                let (Some(target_month), Some(target_year)) =
                    (spec.params.month, spec.params.year)
                else {
                    return Err(PeriodError::MissingParameter {
                        kind: spec.kind,
                        fields: "month and year parameters",
                    });
                };
                (
                    self.month_start(target_year, target_month, 0),
                    self.month_end(target_year, target_month, 0),
                )
            }

            PeriodKind::SpecificRange => {
                let (Some(range_start), Some(range_end)) = (spec.params.start, spec.params.end)
                else {
                    return Err(PeriodError::MissingParameter {
                        kind: spec.kind,
                        fields: "start and end parameters",
                    });
                };
                (
                    self.month_start(range_start.year, range_start.month, 0),
                    self.month_end(range_end.year, range_end.month, 0),
                )
            }

            PeriodKind::Qtd => {
                let quarter = (month - 1) / 3 + 1;
                let quarter_start_month = (quarter - 1) * 3 + 1;
                (
                    self.month_start(year, quarter_start_month, 0),
                    self.month_end(year, month, 0),
                )
            }

            PeriodKind::Ttm => (
                self.month_start(year, month, -11),
                self.month_end(year, month, 0),
            ),

            // Spans previous month start through current month end, not the
            // previous month alone.
            PeriodKind::MonthOverMonth => (
                self.month_start(year, month, -1),
                self.month_end(year, month, 0),
            ),

            PeriodKind::PreviousQuarter => {
                let quarter = (month - 1) / 3 + 1;
                let (previous_quarter, previous_year) = if quarter == 1 {
                    (4, year - 1)
                } else {
                    (quarter - 1, year)
                };
                let quarter_start_month = (previous_quarter - 1) * 3 + 1;
                let start = self.month_start(previous_year, quarter_start_month, 0);
                let end = self.month_start(previous_year, quarter_start_month, 3)
                    - Duration::seconds(1);
                (start, end)
            }
        };

        Ok(ResolvedRange { start, end })
    }

    /// 00:00:00 on the first day of the month `delta` months away from
    /// `(year, month)`.
    fn month_start(&self, year: i32, month: u32, delta: i32) -> DateTime<FixedOffset> {
        let (y, m) = shift_month(year, month, delta);
        self.zone
            .with_ymd_and_hms(y, m, 1, 0, 0, 0)
            .single()
            .expect("first of month exists in a fixed-offset zone")
    }

    /// 23:59:59 on the last day of the month `delta` months away.
    ///
    /// Computed as the first instant of the following month minus one
    /// second, which absorbs variable month lengths and leap years.
    fn month_end(&self, year: i32, month: u32, delta: i32) -> DateTime<FixedOffset> {
        self.month_start(year, month, delta + 1) - Duration::seconds(1)
    }
}

/// Normalized month arithmetic: month 0 rolls back to December of the
/// previous year, month 13 forward to January of the next.
fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 + delta;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}
