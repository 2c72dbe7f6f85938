//! Shared fixtures for SIMBAD parser tests
//!
//! The fixture texts are captured sim-coo ASCII responses (bibliography
//! sections shortened), covering both structured shapes plus the layouts
//! that tripped earlier versions of the list pattern.


/// Single-object response for TIC 249943198 (V* V376 And)
pub const SINGLE_OBJECT: &str = "C.D.S.  -  SIMBAD4 rel 1.7  -  2020.10.19CEST00:40:36

coord 38.798797880814497 49.860304067315198 (ICRS, J2000, 2000.0), radius: 2 arcmin
-----------------------------------------------------------------------------------

Object V* V376 And  ---  WU*  ---  OID=@110892   (@@1956,14)  ---  coobox=2634

Coordinates(ICRS,ep=J2015.5,eq=2000): 02 35 11.7114917855  +49 51 37.094636506 (Opt ) A [0.0376 0.0368 90] 2018yCat.1345....0G
Coordinates(FK4,ep=B1950,eq=1950): 02 31 48.6284751604  +49 38 32.066418905
hierarchy counts: #parents=0, #children=0, #siblings=0
Proper motions: 49.745 -7.569 [0.096 0.086 90] A 2018yCat.1345....0G
Parallax: 5.4417 [0.0490] A 2018yCat.1345....0G
Radial Velocity: 22.83 [0.89] A 2005MNRAS.357..497B
Flux B : 8.02 [0.01] D 2000A&A...355L..27H
Flux V : 7.77 [0.01] D 2000A&A...355L..27H
Flux G : 7.6857 [0.0055] C 2018yCat.1345....0G
Flux J : 7.016 [0.026] C 2003yCat.2246....0C
Spectral type: A4V ~ 2008RMxAA..44..249D
Morphological type: ~ ~ ~
Angular size:     ~     ~   ~ (~)  ~ ~

Identifiers (15):
    2MASS J02351163+4951374         SBC9 1906                       AG+49 295
    BD+49 701                       GSC 03303-00979                 HD 15922
    HIC 12039                       HIP 12039                       PPM 45228
    SAO 38140                       SKY# 3835                       TYC 3303-979-1
    V* V376 And                     Gaia DR1 450600034231640704     Gaia DR2 450600038527653888

Bibcodes  1850-2020 () (43):
  2020A&A...640A.123B  2019PASJ...71...21K  2018A&A...617A..32B  2018RAA....18...55X
  1999IBVS.4659....1K  1999IBVS.4662....1K  1993yCat.3135....0C

Measures (distance:1  MK:1  PLX:4  PM:4  V*:1  velocities:1  ):
distance:1MK:1PLX:4PM:4V*:1velocities:1

Notes (0) :

================================================================================
";

/// Single-object response where the object type is the bare `*` code
/// and the report opens with an identifier heading instead of a coord line
pub const SINGLE_OBJECT_BARE_TYPE: &str = "C.D.S.  -  SIMBAD4 rel 1.7  -  2020.10.19CEST01:08:35

HD  40485
---------

Object HD 40485  ---  *  ---  OID=@3106230   (@@69894,14)  ---  coobox=22785

Coordinates(ICRS,ep=J2015.5,eq=2000): 05 53 08.6603032357  -69 05 54.892025230 (Opt ) A [0.1553 0.1473 90] 2018yCat.1345....0G
Parallax: 4.4794 [0.1392] A 2018yCat.1345....0G
Flux B : 10.009 [0.095] C 2014AJ....148...81M
Flux V : 9.46 [0.02] D 2000A&A...355L..27H
Flux g : 10.122 [0.004] B 2014AJ....148...81M
Flux r : 9.403 [0.025] C 2014AJ....148...81M
Flux i : 9.341 [0.136] D 2014AJ....148...81M
Spectral type: F6IV/V D 1975MSS...C01....0H

Identifiers (15):
   2MASS J05530864-6905543         CD-69 342                       CPC 21.1 891
   CPD-69 540                      GCRV 25414                      GSC 09163-00640
   HD 40485                        PPM 355046                      PV 1646
   SAO 249389                      TYC 9163-640-1                  SSTISAGEMC J055308.64-690554.5
   RAVE J055308.7-690555           Gaia DR1 4657542559618346752    Gaia DR2 4657542563926076672

Bibcodes  1850-2020 () (6):
  2014AJ....148...81M  1993A&AS...99..591G  1993yCat.3135....0C  1991A&AS...90....1P

Notes (0) :

================================================================================
";

/// Object-list response for the same coordinate with a widened radius
pub const OBJECT_LIST: &str = "C.D.S.  -  SIMBAD4 rel 1.7  -  2020.10.19CEST01:29:25

coord 38.798797880814497 49.860304067315198 (ICRS, J2000, 2000.0), radius: 5 arcmin
-----------------------------------------------------------------------------------

Number of objects : 3

#|dist(asec)|            identifier             |typ|      coord1 (ICRS,J2015.5/2000)       |Mag U |Mag B |Mag V |Mag R |Mag I |  spec. type   |#bib|#not
-|----------|-----------------------------------|---|---------------------------------------|------|------|------|------|------|---------------|----|----
1|      0.78|V* V376 And                        |WU*|02 35 11.7114917855 +49 51 37.094636506|     ~| 8.02 | 7.77 |     ~|     ~|A4V            |  43|   0
2|    276.14|TYC 3303-1013-1                    |*  |02 34 50.1999588014 +49 54 38.764879760|     ~|12.03 |11.76 |     ~|     ~|~              |   0|   0
3|    291.47|TYC 3303-841-1                     |*  |02 35 01.5364621634 +49 56 11.434237964|     ~|12.33 |12.10 |     ~|     ~|~              |   0|   0
================================================================================

";

/// Object-list layout where the row counter column is two characters wide
pub const OBJECT_LIST_WIDE_COUNTER: &str = "C.D.S.  -  SIMBAD4 rel 1.7  -  2020.10.19CEST03:45:04

coord 84.696693-2.59459 (ICRS, J2000, 2000.0), radius: 2 arcmin
---------------------------------------------------------------

Number of objects : 70

# |dist(asec)|            identifier             |typ|       coord1 (ICRS,J2000/2000)        |Mag U |Mag B |Mag V |Mag R |Mag I |  spec. type   |#bib|#not
--|----------|-----------------------------------|---|---------------------------------------|------|------|------|------|------|---------------|----|----
1 |      0.02|* sig Ori E                        |Y*O|05 38 47.2050001416 -02 35 40.514907495| 5.66 | 6.38 | 6.46 | 6.84 | 7.08 |B2IV-Vp_He     | 402|   0
2 |      9.98|[BHM2009] SigOri-MAD-32            |NIR|05 38 47.20 -02 35 50.5                |     ~|     ~|     ~|     ~|     ~|~              |   1|   0
3 |     11.49|[BHM2009] SigOri-MAD-29            |NIR|05 38 47.10 -02 35 51.9                |     ~|     ~|     ~|     ~|     ~|~              |   1|   0

";

/// Object-list layout with a leading space before the row counter column
pub const OBJECT_LIST_PADDED_COUNTER: &str = "C.D.S.  -  SIMBAD4 rel 1.7  -  2020.10.19CEST03:45:17

coord 74.267111-66.486262 (ICRS, J2000, 2000.0), radius: 2 arcmin
-----------------------------------------------------------------

Number of objects : 264

 # |dist(asec)|            identifier             |typ|       coord1 (ICRS,J2000/2000)        |Mag U |Mag B |Mag V |Mag R |Mag I |  spec. type   |#bib|#not
---|----------|-----------------------------------|---|---------------------------------------|------|------|------|------|------|---------------|----|----
1  |      0.03|SK -66 34                          |*  |04 57 04.1022066936 -66 29 10.544737222|11.699|12.502|12.779|     ~|     ~|B1Ia           |   7|   0
2  |     18.36|2MASS J04570105-6629085            |*  |04 57 01.057 -66 29 08.56              |     ~|17.715|16.636|     ~|     ~|~              |   1|   0

";

/// Response when nothing falls inside the search radius
pub const NOT_FOUND: &str = "!! No astronomical object found :  coord 10.0 +10.0 (ICRS, J2000, 2000.0), radius: 2 arcmin
";
